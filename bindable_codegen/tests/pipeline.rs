// Text front-end: diagnostics, determinism and parallel generation

use assert_matches::assert_matches;
use bindable_codegen::{CodegenError, DiagnosticKind, GeneratedUnit, Generator, GeneratorConfig};

const COUNTER: &str = r#"
    #[reactive_model]
    pub struct Counter {
        #[observable]
        _counter: i32,
        #[observable]
        _double: i32,
    }

    impl Counter {
        #[dependent_updater]
        fn update_double(&mut self) {
            self.set_double(self.counter() * 2);
        }

        #[click_handler("Reset")]
        fn on_reset(&mut self) {
            self.set_counter(0);
        }
    }
"#;

fn generate(source: &str) -> GeneratedUnit {
    Generator::default().generate_source(source).unwrap()
}

fn kinds(unit: &GeneratedUnit) -> Vec<DiagnosticKind> {
    unit.diagnostics().iter().map(|d| d.kind).collect()
}

#[test_log::test]
fn test_output_is_byte_identical_across_runs() {
    let first = generate(COUNTER).source();
    let second = generate(COUNTER).source();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test_log::test]
fn test_colliding_fields_first_wins() {
    let unit = generate(
        r#"
        #[reactive_model]
        struct Position { #[observable] _x: i32, #[observable] m_x: i32 }
        "#,
    );
    assert_eq!(kinds(&unit), vec![DiagnosticKind::DuplicatePropertyName]);
    assert_eq!(unit.diagnostics()[0].member, "m_x");
    assert_eq!(unit.source().matches("pub fn set_x").count(), 1);
    assert!(unit.source().contains("self . _x = value"));
}

#[test_log::test]
fn test_getter_named_like_an_earlier_setter_is_a_collision() {
    let unit = generate("#[reactive_model] struct S { #[observable] _x: i32, #[observable] _set_x: i32 }");
    assert_eq!(kinds(&unit), vec![DiagnosticKind::DuplicatePropertyName]);
    assert_eq!(unit.diagnostics()[0].member, "_set_x");
    assert_eq!(unit.source().matches("pub fn set_x").count(), 1);
}

#[test]
fn test_public_field_gets_no_property() {
    let unit = generate(
        r#"
        #[reactive_model]
        struct Player { #[observable] pub score: u32, #[observable] _lives: u8 }
        "#,
    );
    assert_eq!(kinds(&unit), vec![DiagnosticKind::ObservableFieldMustNotBePublic]);
    assert!(!unit.source().contains("set_score"));
    assert!(unit.source().contains("set_lives"));
}

#[test]
fn test_each_class_is_independent() {
    let source = format!(
        "{COUNTER}\n{}",
        r#"
        #[reactive_model]
        struct Broken { #[observable] pub exposed: i32 }

        #[reactive_model]
        struct Menu { #[observable] _open: bool }
        impl Menu {
            #[click_handler("Toggle")] fn on_toggle(&mut self) {}
            #[click_handler("Toggle")] fn on_toggle_again(&mut self) {}
        }
        "#
    );
    let unit = generate(&source);
    let names: Vec<&str> = unit.classes.iter().map(|c| c.qualified_name.as_str()).collect();
    assert_eq!(names, vec!["Counter", "Broken", "Menu"]);
    assert_eq!(
        kinds(&unit),
        vec![
            DiagnosticKind::ObservableFieldMustNotBePublic,
            DiagnosticKind::DuplicateElementName
        ]
    );
    assert_eq!(unit.diagnostics()[0].class, "Broken");
    assert_eq!(unit.diagnostics()[1].member, "on_toggle_again");
    assert!(unit.classes[0].code.contains("self . update_double ()"));
}

#[test]
fn test_diagnostics_export_as_json() {
    let unit = generate(
        r#"
        #[reactive_model]
        struct Position { #[observable] _x: i32, #[observable] m_x: i32 }
        "#,
    );
    let json = serde_json::to_value(unit.diagnostics()).unwrap();
    assert_eq!(json[0]["kind"], "DuplicatePropertyName");
    assert_eq!(json[0]["class"], "Position");
    assert_eq!(json[0]["member"], "m_x");

    let whole = serde_json::to_value(&unit).unwrap();
    assert_eq!(whole["classes"][0]["qualified_name"], "Position");
}

#[test]
fn test_helper_calls_are_not_followed() {
    let unit = generate(
        r#"
        #[reactive_model]
        struct Indirect { #[observable] _counter: i32, #[observable] _label: i32 }
        impl Indirect {
            fn read_counter(&self) -> i32 { self._counter }
            #[dependent_updater]
            fn refresh(&mut self) { let value = self.read_counter(); self.set_label(value); }
        }
        "#,
    );
    assert!(unit.diagnostics().is_empty());
    assert!(!unit.source().contains("self . refresh ()"));
}

#[test]
fn test_generate_many_keeps_input_order() {
    let broken = "#[reactive_model] struct {";
    let other = "#[reactive_model] struct Other { #[observable] _flag: bool }";
    let results = Generator::new(GeneratorConfig::default()).generate_many(&[COUNTER, broken, other]);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().classes[0].qualified_name, "Counter");
    assert_matches!(results[1], Err(CodegenError::Parse(_)));
    assert_eq!(results[2].as_ref().unwrap().classes[0].qualified_name, "Other");
    assert_eq!(results[0].as_ref().unwrap().source(), generate(COUNTER).source());
}

#[test]
fn test_custom_runtime_path() {
    let generator = Generator::new(GeneratorConfig::builder().runtime_path("crate::ui").build());
    let unit = generator.generate_source(COUNTER).unwrap();
    assert!(unit.source().contains("crate :: ui :: NotifyPropertyChanged"));
    assert!(!unit.source().contains(":: bindable ::"));
}

#[test]
fn test_custom_prefixes() {
    let config = GeneratorConfig::builder()
        .field_prefixes(vec!["f_".to_string()])
        .build();
    let unit = Generator::new(config)
        .generate_source("#[reactive_model] struct S { #[observable] f_speed: f32, #[observable] _x: f32 }")
        .unwrap();
    assert!(unit.source().contains("pub fn set_speed"));
    // `_x` keeps its underscore in the property name but not in its accessors.
    assert!(unit.diagnostics().is_empty());
    assert!(unit.source().contains("pub fn set_x"));
    assert!(unit.source().contains("\"_x\""));
}

#[test]
fn test_unspellable_property_name_is_rejected() {
    let unit = generate("#[reactive_model] struct S { #[observable] __1st: i32, #[observable] _ok: i32 }");
    assert_eq!(kinds(&unit), vec![DiagnosticKind::InvalidPropertyName]);
    assert_eq!(unit.diagnostics()[0].member, "__1st");
    assert!(unit.source().contains("pub fn set_ok"));
}
