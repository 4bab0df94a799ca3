use askama::Template;
use askama_web::WebTemplate;

use crate::render::{Canvas, Glyph, MarkerColor};

/// Default turtle-style heading: icon upright.
const UPRIGHT_HEADING_DEG: f64 = 90.0;

pub struct IconView {
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub cx: f64,
    pub cy: f64,
    pub width: u32,
    pub height: u32,
    pub rotation: f64,
}

pub struct DotView {
    pub cx: f64,
    pub cy: f64,
    pub r: u32,
    pub color: String,
}

pub struct LabelView {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub text: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub width: u32,
    pub height: u32,
    pub icons: Vec<IconView>,
    pub dots: Vec<DotView>,
    pub labels: Vec<LabelView>,
}

impl MapTemplate {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let projection = canvas.projection();
        let mut icons = Vec::new();
        let mut dots = Vec::new();
        let mut labels = Vec::new();

        for marker in canvas.markers() {
            let p = projection.project(marker.position);
            let color = marker.color.unwrap_or(MarkerColor::Black).to_string();

            match &marker.glyph {
                Glyph::Icon(id) => match canvas.shape(*id) {
                    Some(shape) => icons.push(IconView {
                        href: format!("/assets/shapes/{}", id.index()),
                        x: p.x - f64::from(shape.width) / 2.0,
                        y: p.y - f64::from(shape.height) / 2.0,
                        cx: p.x,
                        cy: p.y,
                        width: shape.width,
                        height: shape.height,
                        // SVG rotates clockwise, headings count anticlockwise from east.
                        rotation: UPRIGHT_HEADING_DEG
                            - marker.heading_deg.unwrap_or(UPRIGHT_HEADING_DEG),
                    }),
                    None => log::warn!("Skipping marker with unknown shape {}", id.index()),
                },
                Glyph::Dot { radius_px } => dots.push(DotView {
                    cx: p.x,
                    cy: p.y,
                    r: *radius_px,
                    color: color.clone(),
                }),
            }

            if let Some(text) = &marker.label {
                labels.push(LabelView {
                    x: p.x,
                    y: p.y,
                    color,
                    text: text.clone(),
                });
            }
        }

        Self {
            width: projection.width_px(),
            height: projection.height_px(),
            icons,
            dots,
            labels,
        }
    }
}
