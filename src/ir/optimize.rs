//! # IR Optimizer
//!
//! Optimization passes that transform IR programs to reduce redundancy.
//!
//! ## Optimization Passes
//!
//! 1. **Remove redundant styles**: Don't emit SetFont(Bold 11) if already set
//! 2. **Merge line feeds**: Combine consecutive Ln ops, drop zero-height ones

use super::ops::{Op, Program, StyleState};

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = self.ops;
        let ops = remove_redundant_styles(ops);
        let ops = merge_line_feeds(ops);
        Program { ops }
    }
}

/// Remove style changes that don't change the current state.
fn remove_redundant_styles(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = StyleState::default();

    for op in ops {
        match &op {
            Op::SetFont {
                family,
                style,
                size,
            } => {
                let font = Some((*family, *style, *size));
                if font != state.font {
                    state.font = font;
                    result.push(op);
                }
            }
            Op::SetTextColor(c) => {
                if *c != state.text_color {
                    state.text_color = *c;
                    result.push(op);
                }
            }
            Op::SetFillColor(c) => {
                if *c != state.fill_color {
                    state.fill_color = *c;
                    result.push(op);
                }
            }
            Op::SetDrawColor(c) => {
                if *c != state.draw_color {
                    state.draw_color = *c;
                    result.push(op);
                }
            }
            _ => result.push(op),
        }
    }

    result
}

/// Merge adjacent `Ln` ops into one and drop empty feeds.
fn merge_line_feeds(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());

    for op in ops {
        if let Op::Ln(h) = op {
            if h == 0.0 {
                continue;
            }
            if let Some(Op::Ln(prev)) = result.last_mut() {
                *prev += h;
                continue;
            }
        }
        result.push(op);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{FontFamily, FontStyle};
    use crate::template::Rgb;

    fn font(style: FontStyle, size: f32) -> Op {
        Op::SetFont {
            family: FontFamily::Helvetica,
            style,
            size,
        }
    }

    #[test]
    fn test_remove_redundant_font() {
        let ops = vec![
            font(FontStyle::Bold, 11.0),
            font(FontStyle::Bold, 11.0),
            font(FontStyle::Regular, 10.0),
            font(FontStyle::Bold, 11.0),
        ];
        let result = remove_redundant_styles(ops);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_remove_redundant_colors() {
        let blue = Rgb::hex("#2b6cb0");
        let ops = vec![
            Op::SetTextColor(Rgb::new(0, 0, 0)), // already black
            Op::SetTextColor(blue),
            Op::SetTextColor(blue),
            Op::SetFillColor(blue),
            Op::SetDrawColor(Rgb::new(0, 0, 0)), // already black
        ];
        let result = remove_redundant_styles(ops);
        assert_eq!(
            result,
            vec![Op::SetTextColor(blue), Op::SetFillColor(blue)]
        );
    }

    #[test]
    fn test_merge_line_feeds() {
        let ops = vec![Op::Ln(2.0), Op::Ln(0.0), Op::Ln(10.0), Op::Rule, Op::Ln(4.0)];
        let result = merge_line_feeds(ops);
        assert_eq!(result, vec![Op::Ln(12.0), Op::Rule, Op::Ln(4.0)]);
    }

    #[test]
    fn test_optimize_keeps_content() {
        let program: Program = vec![
            font(FontStyle::Regular, 10.0),
            Op::MultiCell {
                text: "a".into(),
                line_height: 6.0,
            },
            font(FontStyle::Regular, 10.0),
            Op::MultiCell {
                text: "b".into(),
                line_height: 6.0,
            },
        ]
        .into_iter()
        .collect();
        let optimized = program.optimize();
        assert_eq!(optimized.len(), 3);
        assert_eq!(optimized.texts(), vec!["a", "b"]);
    }
}
