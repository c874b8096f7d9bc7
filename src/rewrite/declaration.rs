use semver::Version;

/// Symbol assigned in the version declaration file unless overridden.
pub const DEFAULT_SYMBOL: &str = "LIGHTSTEP_PYTHON_TRACER_VERSION";

/// Render the full body of the declaration file: `SYMBOL="X.Y.Z"` plus a newline.
pub fn render_declaration(symbol: &str, version: &Version) -> String {
    format!("{}=\"{}\"\n", symbol, version)
}
