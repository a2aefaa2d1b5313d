//! Mermaid syntax tokens for model values.

use flowscribe_core::{ArrowType, Direction, LineType, Link, Shape};

pub(crate) fn direction(direction: Direction) -> &'static str {
    match direction {
        Direction::HorizontalRight => "LR",
        Direction::HorizontalLeft => "RL",
        Direction::Vertical => "TB",
    }
}

/// Left and right delimiters wrapping a node label.
pub(crate) fn shape_delimiters(shape: Shape) -> (&'static str, &'static str) {
    match shape {
        Shape::Terminator => ("(", ")"),
        Shape::Process => ("[", "]"),
        Shape::AlternateProcess => ("([", "])"),
        Shape::Subprocess => ("[[", "]]"),
        Shape::Decision => ("{", "}"),
        Shape::InputOutput => ("[/", "/]"),
        Shape::Connector => ("((", "))"),
        Shape::Database => ("[(", ")]"),
    }
}

/// The three character token of a link drawn without arrow heads.
fn line(line_type: LineType) -> &'static str {
    match line_type {
        LineType::None => "~~~",
        LineType::Solid => "---",
        LineType::Dotted => "-.-",
        LineType::Thick => "===",
    }
}

/// Origin and target glyphs for an arrow type.
fn arrow_glyphs(arrow_type: ArrowType) -> (&'static str, &'static str) {
    match arrow_type {
        ArrowType::None => ("", ""),
        ArrowType::Normal => ("<", ">"),
        ArrowType::Circle => ("o", "o"),
        ArrowType::Cross => ("x", "x"),
    }
}

/// Returns the token placed between a link's origin and target names.
///
/// Arrow heads are only drawn when the target end asks for one; Mermaid has
/// no origin-only arrow. Solid and thick runs lose a character when a glyph
/// is drawn so the token keeps its width. A label splits the token into an
/// origin half and a target half around the quoted text. Invisible links
/// never carry arrows or labels.
pub(crate) fn link(link: &Link) -> String {
    let line_type = link.line_type();
    let token = line(line_type);
    if line_type == LineType::None {
        return token.to_string();
    }

    let (origin_glyph, target_glyph) = if link.target_arrow() {
        let (origin, target) = arrow_glyphs(link.arrow_type());
        (if link.origin_arrow() { origin } else { "" }, target)
    } else {
        ("", "")
    };

    if let Some(label) = link.label().filter(|label| !label.is_empty()) {
        return format!(
            "{origin_glyph}{} \"{label}\" {}{target_glyph}",
            &token[..2],
            &token[1..]
        );
    }

    let arrow_drawn = !origin_glyph.is_empty() || !target_glyph.is_empty();
    let run = match line_type {
        LineType::Solid | LineType::Thick if arrow_drawn => &token[..2],
        _ => token,
    };
    format!("{origin_glyph}{run}{target_glyph}")
}

#[cfg(test)]
mod tests {
    use flowscribe_core::Node;

    use super::*;

    fn link_between(line_type: LineType, label: Option<&str>) -> Link {
        Link::new(
            &Node::process("Origin", None),
            &Node::process("Target", None),
            line_type,
            label,
        )
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(direction(Direction::HorizontalRight), "LR");
        assert_eq!(direction(Direction::HorizontalLeft), "RL");
        assert_eq!(direction(Direction::Vertical), "TB");
    }

    #[test]
    fn test_shape_delimiters() {
        assert_eq!(shape_delimiters(Shape::Process), ("[", "]"));
        assert_eq!(shape_delimiters(Shape::Decision), ("{", "}"));
        assert_eq!(shape_delimiters(Shape::Database), ("[(", ")]"));
        assert_eq!(shape_delimiters(Shape::Connector), ("((", "))"));
    }

    #[test]
    fn test_link_tokens() {
        let cases = [
            // (line, arrow, origin arrow, target arrow, label, expected)
            (LineType::None, ArrowType::None, false, false, Some("some label"), "~~~"),
            (LineType::None, ArrowType::Normal, true, true, None, "~~~"),
            (LineType::Solid, ArrowType::None, false, false, None, "---"),
            (LineType::Solid, ArrowType::None, false, false, Some("some label"), "-- \"some label\" --"),
            (LineType::Dotted, ArrowType::None, false, false, None, "-.-"),
            (LineType::Dotted, ArrowType::None, false, false, Some("some label"), "-. \"some label\" .-"),
            (LineType::Thick, ArrowType::None, false, false, None, "==="),
            (LineType::Thick, ArrowType::None, false, false, Some("some label"), "== \"some label\" =="),
            (LineType::Thick, ArrowType::Circle, true, true, None, "o==o"),
            (LineType::Solid, ArrowType::Normal, true, false, None, "---"),
            (LineType::Solid, ArrowType::Normal, false, true, None, "-->"),
            (LineType::Solid, ArrowType::Normal, true, true, None, "<-->"),
            (LineType::Dotted, ArrowType::Normal, false, true, None, "-.->"),
            (LineType::Dotted, ArrowType::Cross, true, true, Some("x"), "x-. \"x\" .-x"),
            (LineType::Solid, ArrowType::None, true, true, None, "---"),
            (LineType::Solid, ArrowType::Normal, false, true, Some(""), "-->"),
        ];

        for (line_type, arrow_type, origin, target, label, expected) in cases {
            let link = link_between(line_type, label)
                .with_arrow_type(arrow_type)
                .with_arrows(origin, target);
            assert_eq!(
                super::link(&link),
                expected,
                "{line_type:?} {arrow_type:?} origin={origin} target={target} label={label:?}"
            );
        }
    }
}
