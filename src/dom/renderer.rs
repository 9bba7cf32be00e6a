use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::paint::CellPaint;

/// Materializes a grid into one element per cell inside a container node.
///
/// Elements are stored row-major, parallel to `Grid::cells`, so a cell and
/// its element share an index.
pub struct DomRenderer {
    document: Document,
    container: HtmlElement,
    cells: Vec<HtmlElement>,
}

impl DomRenderer {
    pub fn attach(document: &Document, container_selector: &str) -> Result<Self, JsValue> {
        let container = document
            .query_selector(container_selector)?
            .ok_or_else(|| JsValue::from_str(container_selector))?
            .dyn_into::<HtmlElement>()?;

        Ok(Self {
            document: document.clone(),
            container,
            cells: Vec::new(),
        })
    }

    /// Clear all visible elements before a remount.
    pub fn unmount(&mut self) {
        self.container.set_inner_html("");
        self.cells.clear();
    }

    /// Produce size×size cell elements in row-major insertion order, each
    /// sized to `cell_edge` pixels, laid out as `size` CSS grid columns.
    pub fn mount(&mut self, size: u32, cell_edge: f64) -> Result<(), JsValue> {
        self.unmount();

        self.container
            .style()
            .set_property("grid-template-columns", &format!("repeat({}, 0fr)", size))?;

        for _ in 0..(size as usize * size as usize) {
            let el = self
                .document
                .create_element("div")?
                .dyn_into::<HtmlElement>()?;
            el.class_list().add_1("cell")?;

            let style = el.style();
            style.set_property("width", &format!("{}px", cell_edge))?;
            style.set_property("height", &format!("{}px", cell_edge))?;
            style.set_property("background-color", &CellPaint::Clear.to_css())?;

            self.container.append_child(&el)?;
            self.cells.push(el);
        }

        Ok(())
    }

    pub fn cell_elements(&self) -> &[HtmlElement] {
        &self.cells
    }

    /// Reflect one painted cell onto its element.
    pub fn apply_paint(&self, idx: usize, paint: &CellPaint) -> Result<(), JsValue> {
        if let Some(el) = self.cells.get(idx) {
            el.style().set_property("background-color", &paint.to_css())?;
        }
        Ok(())
    }

    /// Return every mounted element to the background color.
    pub fn clear_all(&self) -> Result<(), JsValue> {
        let css = CellPaint::Clear.to_css();
        for el in &self.cells {
            el.style().set_property("background-color", &css)?;
        }
        Ok(())
    }
}
