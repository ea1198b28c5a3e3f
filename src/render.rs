//! Country enumeration rendering
//!
//! The catalog is bound to a template as `countries`, a sequence of
//! `{name, iso_code}` maps in catalog order. Undefined bindings are errors.
//! Output is rendered entirely in memory and then swapped into place, so a
//! failing run leaves any previous file untouched.

use minijinja::{Environment, UndefinedBehavior, context};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::CountryCatalog;
use crate::error::{Error, Result};

/// Built-in template producing a Rust `Country` enum
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/country_enum.rs.jinja");

const TEMPLATE_NAME: &str = "country_enum";

/// Render `template` with the catalog bound to `countries`
pub fn render_enum(catalog: &CountryCatalog, template: &str) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_filter("rust_str", rust_str);
    env.add_template(TEMPLATE_NAME, template)?;

    let tmpl = env.get_template(TEMPLATE_NAME)?;
    Ok(tmpl.render(context!(countries => catalog.as_slice()))?)
}

/// Quote a value as a Rust string literal
fn rust_str(value: String) -> String {
    format!("{value:?}")
}

/// Read the template at `path`, or fall back to [`DEFAULT_TEMPLATE`]
pub async fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        None => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
        Some(path) => {
            let content =
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| Error::TemplateRead {
                        path: path.to_path_buf(),
                        source,
                    })?;
            Ok(Cow::Owned(content))
        }
    }
}

/// Render the enumeration and replace the file at `path` with it
pub async fn write_enum(catalog: &CountryCatalog, template: &str, path: &Path) -> Result<()> {
    let rendered = render_enum(catalog, template)?;
    write_atomic(path, rendered.as_bytes()).await?;

    info!(
        path = %path.display(),
        countries = catalog.len(),
        "rendered country enumeration"
    );
    Ok(())
}

/// Write to a sibling temporary file, then rename it over `path`
async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let output_err = |source: std::io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(output_err)?;
    }

    let tmp_path = temporary_path(path);
    debug!(tmp = %tmp_path.display(), "writing rendered output");

    if let Err(e) = tokio::fs::write(&tmp_path, content).await {
        tokio::fs::remove_file(&tmp_path).await.ok();
        return Err(output_err(e));
    }

    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        tokio::fs::remove_file(&tmp_path).await.ok();
        return Err(output_err(e));
    }

    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    path.with_file_name(format!(".{file_name}.tmp"))
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Country;

    const LINE_TEMPLATE: &str =
        "{% for country in countries %}{{ country.iso_code }} = {{ country.name }}{% endfor %}";

    fn testland() -> CountryCatalog {
        CountryCatalog::new(vec![Country::new("Testland", "TL")]).unwrap()
    }

    #[test]
    fn renders_one_line_per_country() {
        let rendered = render_enum(&testland(), LINE_TEMPLATE).unwrap();
        assert_eq!(rendered, "TL = Testland");
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalog = CountryCatalog::new(vec![
            Country::new("Testland", "TL"),
            Country::new("Otherland", "OL"),
        ])
        .unwrap();

        let first = render_enum(&catalog, DEFAULT_TEMPLATE).unwrap();
        let second = render_enum(&catalog, DEFAULT_TEMPLATE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn undefined_binding_is_a_render_error() {
        let err = render_enum(&testland(), "{{ regions }}").unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn undefined_attribute_is_a_render_error() {
        let err = render_enum(
            &testland(),
            "{% for country in countries %}{{ country.capital }}{% endfor %}",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn malformed_template_is_a_render_error() {
        let err = render_enum(&testland(), "{% for country in countries %}").unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn default_template_produces_enum_variants() {
        let catalog = CountryCatalog::new(vec![
            Country::new("France", "FR"),
            Country::new("Côte d'Ivoire", "CI"),
        ])
        .unwrap();

        let rendered = render_enum(&catalog, DEFAULT_TEMPLATE).unwrap();

        assert!(rendered.contains("pub enum Country {"));
        assert!(rendered.contains("    /// France\n    FR,"));
        assert!(rendered.contains("Self::CI => \"Côte d'Ivoire\","));
        assert!(rendered.contains("\"FR\" => Ok(Self::FR),"));
        assert!(rendered.ends_with("}\n"));
        // Catalog order is kept
        assert!(rendered.find("    FR,").unwrap() < rendered.find("    CI,").unwrap());
    }

    #[test]
    fn rust_str_escapes_quotes() {
        assert_eq!(rust_str("say \"hi\"".to_string()), r#""say \"hi\"""#);
    }

    #[tokio::test]
    async fn write_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("country").join("generated.rs");
        std::fs::create_dir_all(out.parent().unwrap()).unwrap();
        std::fs::write(&out, "old content").unwrap();

        write_enum(&testland(), LINE_TEMPLATE, &out).await.unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "TL = Testland");
        assert!(!temporary_path(&out).exists());
    }

    #[tokio::test]
    async fn failed_render_leaves_previous_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("generated.rs");
        std::fs::write(&out, "previous").unwrap();

        let err = write_enum(&testland(), "{{ undefined_binding }}", &out)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Render(_)));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous");
        assert!(!temporary_path(&out).exists());
    }

    #[tokio::test]
    async fn load_template_defaults_to_builtin() {
        let template = load_template(None).await.unwrap();
        assert_eq!(template, DEFAULT_TEMPLATE);
    }

    #[tokio::test]
    async fn load_template_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.jinja");
        std::fs::write(&path, LINE_TEMPLATE).unwrap();

        let template = load_template(Some(&path)).await.unwrap();
        assert_eq!(template, LINE_TEMPLATE);
    }

    #[tokio::test]
    async fn missing_template_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_template(Some(&dir.path().join("absent.jinja")))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::TemplateRead { .. }));
    }

    #[test]
    fn temporary_path_is_a_hidden_sibling() {
        assert_eq!(
            temporary_path(Path::new("src/country/generated.rs")),
            PathBuf::from("src/country/.generated.rs.tmp")
        );
    }
}
