use crate::model::Grid;
use crate::paint::ModeController;

use super::settings::WidgetSettings;
use super::WidgetCore;

pub(super) fn create_widget_core(settings: WidgetSettings) -> WidgetCore {
    WidgetCore {
        grid: Grid::new(settings.default_size),
        modes: ModeController::new(),
        settings,
        rng_state: 12345,
    }
}
