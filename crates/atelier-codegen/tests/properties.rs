//! Property tests over generated components and themes.

use atelier_codegen::{generate_component, generate_theme, Framework, ThemeFormat};
use atelier_core::{ComponentSpec, PropDeclaration, Spacing, ThemeSpec, Typography};
use indexmap::IndexMap;
use proptest::prelude::*;

fn token_map() -> impl Strategy<Value = IndexMap<String, String>> {
    prop::collection::vec(("[a-z][a-z0-9]{0,5}", "[a-z0-9#.(), ]{1,12}"), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<IndexMap<String, String>>())
}

fn weight_map() -> impl Strategy<Value = IndexMap<String, serde_json::Number>> {
    prop::collection::vec(("[a-z]{1,8}", 100u32..=900), 0..5).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k, v)| (k, serde_json::Number::from(v)))
            .collect::<IndexMap<_, _>>()
    })
}

fn theme() -> impl Strategy<Value = ThemeSpec> {
    let colors = prop::collection::vec(("[a-z]{1,8}", token_map()), 0..4)
        .prop_map(|pairs| pairs.into_iter().collect::<IndexMap<_, _>>());
    let typography = (token_map(), token_map(), weight_map(), token_map(), token_map()).prop_map(
        |(font_family, font_size, font_weight, line_height, letter_spacing)| Typography {
            font_family,
            font_size,
            font_weight,
            line_height,
            letter_spacing,
        },
    );

    ("[A-Za-z ]{0,12}", colors, typography, token_map(), token_map(), token_map()).prop_map(
        |(name, colors, typography, scale, border_radius, shadows)| ThemeSpec {
            name,
            colors,
            typography,
            spacing: Spacing { scale },
            border_radius,
            shadows,
        },
    )
}

fn prop_decl() -> impl Strategy<Value = PropDeclaration> {
    (
        "[a-z][a-zA-Z]{0,6}",
        "[a-z]{1,8}",
        any::<bool>(),
        prop::option::of(any::<i32>()),
    )
        .prop_map(|(name, prop_type, required, default)| PropDeclaration {
            name,
            prop_type,
            required,
            default: default.map(Into::into),
            description: None,
        })
}

fn component() -> impl Strategy<Value = ComponentSpec> {
    (
        "[A-Z][a-zA-Z]{0,8}",
        "return [a-z<>/ ]{0,20};",
        prop::collection::vec(prop_decl(), 0..6),
    )
        .prop_map(|(name, code, props)| {
            let mut spec = ComponentSpec::new(name, code);
            for prop in props {
                spec.add_prop(prop);
            }
            spec
        })
}

fn css_leaf_counts(theme: &ThemeSpec) -> Vec<(&'static str, usize)> {
    vec![
        ("--color-", theme.colors.values().map(IndexMap::len).sum()),
        ("--font-", theme.typography.font_family.len()),
        ("--text-", theme.typography.font_size.len()),
        ("--font-", theme.typography.font_weight.len()),
        ("--spacing-", theme.spacing.scale.len()),
        ("--radius-", theme.border_radius.len()),
        ("--shadow-", theme.shadows.len()),
    ]
}

proptest! {
    #[test]
    fn component_output_is_deterministic(spec in component()) {
        for framework in Framework::ALL {
            let first = generate_component(&spec, framework).unwrap();
            let second = generate_component(&spec, framework).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn theme_output_is_deterministic(theme in theme()) {
        for format in ThemeFormat::ALL {
            let first = generate_theme(&theme, format).unwrap();
            let second = generate_theme(&theme, format).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn every_prop_is_referenced(spec in component()) {
        let n = spec.props.len();

        let react = generate_component(&spec, Framework::React).unwrap();
        let fields = react
            .lines()
            .filter(|l| l.starts_with("  ") && l.ends_with(';'))
            .count();
        prop_assert_eq!(fields, n);

        let vue = generate_component(&spec, Framework::Vue).unwrap();
        prop_assert_eq!(vue.lines().filter(|l| l.starts_with("    type: ")).count(), n);

        let svelte = generate_component(&spec, Framework::Svelte).unwrap();
        prop_assert_eq!(svelte.lines().filter(|l| l.starts_with("  export let ")).count(), n);

        for (key, prop) in &spec.props {
            let field = format!("  {}: {};", key, prop.prop_type);
            prop_assert!(react.lines().any(|l| l == field), "no field line {:?}", field);
        }
    }

    #[test]
    fn empty_props_emit_no_block(name in "[A-Z][a-z]{0,8}", code in "return [a-z]{0,10};") {
        let spec = ComponentSpec::new(name.clone(), code);

        let react = generate_component(&spec, Framework::React).unwrap();
        prop_assert!(!react.contains("interface"), "unexpected props interface");
        let signature = format!("export const {} = () => {{", name);
        prop_assert!(react.contains(&signature), "missing signature {:?}", signature);

        let vue = generate_component(&spec, Framework::Vue).unwrap();
        prop_assert!(!vue.contains("props:"), "unexpected props block");

        let svelte = generate_component(&spec, Framework::Svelte).unwrap();
        prop_assert!(!svelte.contains("export let"), "unexpected exported prop");
    }

    #[test]
    fn json_theme_round_trips(theme in theme()) {
        let json = generate_theme(&theme, ThemeFormat::Json).unwrap();
        let parsed: ThemeSpec = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, theme);
    }

    #[test]
    fn css_declares_every_leaf_in_group_order(theme in theme()) {
        let css = generate_theme(&theme, ThemeFormat::Css).unwrap();
        prop_assert!(css.starts_with(":root {\n"), "missing :root opener in {:?}", css);
        prop_assert!(css.ends_with("\n}\n"), "missing closing brace in {:?}", css);

        let declarations: Vec<&str> = css
            .lines()
            .filter(|l| l.starts_with("  --"))
            .map(str::trim_start)
            .collect();

        let counts = css_leaf_counts(&theme);
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(declarations.len(), total);

        let mut rest = declarations.as_slice();
        for (prefix, n) in counts {
            let (group, tail) = rest.split_at(n);
            for line in group {
                prop_assert!(line.starts_with(prefix), "{} should start with {}", line, prefix);
            }
            rest = tail;
        }
    }
}
