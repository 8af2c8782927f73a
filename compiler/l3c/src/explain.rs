//! `--explain`: describe translator error codes.

use l3_diagnostic::ErrorCode;

/// Describe one error code and the translator that raises it.
pub fn explain(code: ErrorCode) -> String {
    let phase = if code.is_lowering_error() {
        "lowering L31 to L3"
    } else {
        "rendering L2 to Python-like text"
    };
    format!("{code}: {}\n\nRaised while {phase}.", code.description())
}

/// Every error code, grouped by the translator that raises it.
pub fn list_codes() -> String {
    let section = |title: &str, belongs: fn(&ErrorCode) -> bool| {
        let lines: Vec<String> = ErrorCode::ALL
            .iter()
            .filter(|code| belongs(code))
            .map(|code| format!("  {code}  {}", code.description()))
            .collect();
        format!("{title}:\n{}", lines.join("\n"))
    };
    format!(
        "{}\n\n{}",
        section("Lowering", ErrorCode::is_lowering_error),
        section("Rendering", ErrorCode::is_render_error)
    )
}
