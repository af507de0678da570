//! Starter content for newly created components and themes.

use crate::theme::{Spacing, ThemeSpec, Typography};
use indexmap::IndexMap;

fn tokens(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl ThemeSpec {
    /// The token set every new theme starts from.
    pub fn starter(name: impl Into<String>) -> Self {
        let colors = [
            (
                "primary",
                tokens(&[
                    ("50", "#eff6ff"),
                    ("100", "#dbeafe"),
                    ("200", "#bfdbfe"),
                    ("500", "#3b82f6"),
                    ("900", "#1e3a8a"),
                ]),
            ),
            (
                "secondary",
                tokens(&[
                    ("50", "#faf5ff"),
                    ("100", "#f3e8ff"),
                    ("200", "#e9d5ff"),
                    ("500", "#a855f7"),
                    ("900", "#581c87"),
                ]),
            ),
            (
                "neutral",
                tokens(&[
                    ("50", "#f9fafb"),
                    ("100", "#f3f4f6"),
                    ("200", "#e5e7eb"),
                    ("500", "#6b7280"),
                    ("900", "#111827"),
                ]),
            ),
            (
                "success",
                tokens(&[("50", "#f0fdf4"), ("500", "#22c55e"), ("900", "#14532d")]),
            ),
            (
                "warning",
                tokens(&[("50", "#fffbeb"), ("500", "#f59e0b"), ("900", "#78350f")]),
            ),
            (
                "error",
                tokens(&[("50", "#fef2f2"), ("500", "#ef4444"), ("900", "#7f1d1d")]),
            ),
        ]
        .into_iter()
        .map(|(category, scale)| (category.to_string(), scale))
        .collect();

        let typography = Typography {
            font_family: tokens(&[
                ("sans", "system-ui, sans-serif"),
                ("serif", "Georgia, serif"),
                ("mono", "monospace"),
            ]),
            font_size: tokens(&[
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("base", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
            ]),
            font_weight: [("normal", 400u32), ("medium", 500), ("semibold", 600), ("bold", 700)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect(),
            line_height: tokens(&[("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")]),
            letter_spacing: tokens(&[
                ("tight", "-0.025em"),
                ("normal", "0"),
                ("wide", "0.025em"),
            ]),
        };

        Self {
            name: name.into(),
            colors,
            typography,
            spacing: Spacing {
                scale: tokens(&[
                    ("0", "0"),
                    ("1", "0.25rem"),
                    ("2", "0.5rem"),
                    ("4", "1rem"),
                    ("8", "2rem"),
                    ("16", "4rem"),
                ]),
            },
            border_radius: tokens(&[
                ("none", "0"),
                ("sm", "0.125rem"),
                ("md", "0.375rem"),
                ("lg", "0.5rem"),
                ("full", "9999px"),
            ]),
            shadows: tokens(&[
                ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
                ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),
                ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
            ]),
        }
    }
}

/// Placeholder source for a newly created component.
///
/// The function identifier is `name` with all whitespace removed; the
/// leading comment keeps the name as typed.
pub fn starter_component_code(name: &str) -> String {
    let ident: String = name.split_whitespace().collect();
    format!(
        "// {name} Component\n\
         export default function {ident}() {{\n  \
         return (\n    \
         <div>\n      \
         {{/* Your component code here */}}\n    \
         </div>\n  \
         )\n\
         }}"
    )
}
