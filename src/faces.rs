use crate::camera::{CssProjection, SceneCamera};
use crate::core::Orientation;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod layout;

use layout::{cube_transform, FaceLayout, FACES};

/// The six HTML panels, placed on a CSS 3D cube inside `#cube-stage`.
///
/// The stage's perspective is derived from the scene camera so the panels
/// line up with what the WebGPU canvas draws behind them.
pub struct CubeFaces {
    stage: web::HtmlElement,
    cube: web::HtmlElement,
    faces: Vec<(layout::FacePlacement, web::HtmlElement)>,
    camera: SceneCamera,
    projection: Option<CssProjection>,
    viewport_height: f32,
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("div is not an HtmlElement: {:?}", e))
}

impl CubeFaces {
    pub fn build(
        document: &web::Document,
        stage_id: &str,
        camera: SceneCamera,
    ) -> anyhow::Result<Self> {
        let stage: web::HtmlElement = dom::element_by_id(document, stage_id)?;
        let cube = create_div(document, "cube")?;
        let mut faces = Vec::with_capacity(FACES.len());
        for face in FACES.iter() {
            let el = create_div(document, &format!("face {}", face.placement.class_name()))?;
            let wrapper = create_div(document, "wrapper")?;
            wrapper.set_inner_html(face.html);
            el.append_child(&wrapper)
                .map_err(|e| anyhow::anyhow!("append face content: {:?}", e))?;
            cube.append_child(&el)
                .map_err(|e| anyhow::anyhow!("append face: {:?}", e))?;
            faces.push((face.placement, el));
        }
        stage
            .append_child(&cube)
            .map_err(|e| anyhow::anyhow!("append cube: {:?}", e))?;

        Ok(Self {
            stage,
            cube,
            faces,
            camera,
            projection: None,
            viewport_height: 0.0,
        })
    }

    pub fn cube(&self) -> &web::HtmlElement {
        &self.cube
    }

    /// Re-derive perspective and panel sizes when the viewport height changes.
    pub fn layout_if_needed(&mut self, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        if self.projection.is_some() && (viewport_height - self.viewport_height).abs() < 0.5 {
            return;
        }
        self.viewport_height = viewport_height;
        let projection = self.camera.css_projection(viewport_height);
        let style = self.stage.style();
        _ = style.set_property("perspective", &format!("{:.2}px", projection.perspective_px));

        let face_layout = FaceLayout::new(&projection);
        for (placement, el) in &self.faces {
            _ = el.set_attribute("style", &face_layout.face_style(*placement));
        }
        self.projection = Some(projection);
    }

    /// Rotate the cube to `orientation`. No-op until the first layout.
    pub fn apply(&self, orientation: Orientation) {
        if let Some(projection) = &self.projection {
            _ = self
                .cube
                .style()
                .set_property("transform", &cube_transform(orientation, projection));
        }
    }
}
