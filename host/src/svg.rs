//! SVG drawing backend.

use std::fmt::Write;

use ringmaze_core::geometry::{Arc, Point};
use ringmaze_core::render::{Canvas, Color, Stroke};

const TEXT_FONT: &str = "Consolas, monospace";
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Collects draw calls as SVG elements.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    background: Option<Color>,
    body: String,
    elements: usize,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            body: String::new(),
            elements: 0,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Number of drawn elements, background excluded.
    pub fn element_count(&self) -> usize {
        self.elements
    }

    /// Wrap the collected elements in an `<svg>` document.
    pub fn finish(self) -> String {
        let mut doc = String::with_capacity(self.body.len() + 256);
        let _ = writeln!(
            doc,
            r#"<svg xmlns="{}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            SVG_NAMESPACE,
            w = self.width,
            h = self.height
        );
        if let Some(color) = self.background {
            let _ = writeln!(
                doc,
                r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                self.width,
                self.height,
                color.css_name()
            );
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }

    fn stroke_attrs(stroke: &Stroke) -> String {
        let mut attrs = format!(
            r#"stroke="{}" stroke-width="{}""#,
            stroke.color.css_name(),
            stroke.width
        );
        if let Some([on, off]) = stroke.dash {
            let _ = write!(attrs, r#" stroke-dasharray="{} {}""#, on, off);
        }
        attrs
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            Self::stroke_attrs(stroke)
        );
        self.elements += 1;
    }

    fn arc(&mut self, arc: &Arc, stroke: &Stroke) {
        let start = arc.start_point();
        let end = arc.end_point();
        let large_arc = u8::from(arc.sweep() > std::f64::consts::PI);
        // SVG sweep-flag 1 = increasing angle, which is canvas "clockwise"
        let sweep_flag = u8::from(!arc.counterclockwise);

        let _ = writeln!(
            self.body,
            r#"<path d="M {:.2} {:.2} A {:.2} {:.2} 0 {} {} {:.2} {:.2}" fill="none" {}/>"#,
            start.x,
            start.y,
            arc.radius,
            arc.radius,
            large_arc,
            sweep_flag,
            end.x,
            end.y,
            Self::stroke_attrs(stroke)
        );
        self.elements += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            center.x,
            center.y,
            radius,
            color.css_name()
        );
        self.elements += 1;
    }

    fn text(&mut self, at: Point, text: &str, size: f64, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}px" fill="{}">{}</text>"#,
            at.x,
            at.y,
            TEXT_FONT,
            size,
            color.css_name(),
            escape(text)
        );
        self.elements += 1;
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_arc_flags() {
        let mut canvas = SvgCanvas::new(200.0, 200.0);
        let stroke = Stroke::solid(Color::Green, 2.0);
        let quarter = Arc {
            center: Point::new(100.0, 100.0),
            radius: 50.0,
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            counterclockwise: false,
        };
        canvas.arc(&quarter, &stroke);
        canvas.arc(
            &Arc {
                counterclockwise: true,
                ..quarter
            },
            &stroke,
        );

        let svg = canvas.finish();
        assert!(svg.contains("M 150.00 100.00 A 50.00 50.00 0 0 1 100.00 150.00"));
        assert!(svg.contains("M 150.00 100.00 A 50.00 50.00 0 1 0 100.00 150.00"));
    }

    #[test]
    fn test_document_wrapping() {
        let mut canvas = SvgCanvas::new(300.0, 100.0).with_background(Color::Black);
        canvas.line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            &Stroke {
                color: Color::Yellow,
                width: 2.0,
                dash: Some([5.0, 5.0]),
            },
        );
        canvas.text(Point::new(1.0, 2.0), "<3", 16.0, Color::White);
        assert_eq!(canvas.element_count(), 2);

        let svg = canvas.finish();
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 300 100""#));
        assert!(svg.contains(r#"fill="black""#));
        assert!(svg.contains(r#"stroke-dasharray="5 5""#));
        assert!(svg.contains("&lt;3"));
    }
}
