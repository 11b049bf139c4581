//! Precompiled template set backed by tera.
//!
//! Every configured template is read and compiled exactly once, before any
//! scheme is touched. A single bad body aborts compilation of the whole set.

use std::path::{Path, PathBuf};

use tera::Tera;

use base16_core::Template;

use crate::context::SchemeContext;
use crate::error::RenderError;
use crate::syntax;

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

/// All configured templates, compiled and ready to render.
pub struct TemplateSet {
    templates: Vec<Template>,
    tera: Tera,
}

impl TemplateSet {
    /// Read `<templates_dir>/<name>.mustache` for every template and compile
    /// it. Template order is kept for rendering.
    pub fn compile(templates_dir: &Path, templates: Vec<Template>) -> Result<Self, RenderError> {
        let mut sources = Vec::with_capacity(templates.len());
        for template in templates {
            let path = template.source_path(templates_dir);
            let body = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            sources.push((template, path, body));
        }
        Self::from_sources(sources)
    }

    /// Compile bodies already held in memory. `path` is only used for
    /// diagnostics.
    pub fn from_sources(
        sources: Vec<(Template, PathBuf, String)>,
    ) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter(syntax::ESCAPE_FILTER, syntax::escape_filter);

        let mut templates = Vec::with_capacity(sources.len());
        for (template, path, body) in sources {
            let lowered = syntax::lower(&body).map_err(|message| RenderError::Syntax {
                template: template.name.clone(),
                path: path.clone(),
                message,
            })?;
            tera.add_raw_template(&template.name, &lowered)
                .map_err(|source| RenderError::Compile {
                    template: template.name.clone(),
                    source,
                })?;
            tracing::debug!("compiled template '{}' from {}", template.name, path.display());
            templates.push(template);
        }
        Ok(TemplateSet { templates, tera })
    }

    /// Templates in configuration order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render the template called `name` against `ctx`.
    ///
    /// A body referencing a key missing from `ctx` is a [`RenderError::Render`].
    pub fn render(&self, name: &str, ctx: &SchemeContext) -> Result<String, RenderError> {
        if !self.templates.iter().any(|t| t.name == name) {
            return Err(RenderError::UnknownTemplate(name.to_string()));
        }
        let tera_ctx = ctx.to_tera_context();
        self.tera
            .render(name, &tera_ctx)
            .map_err(|source| RenderError::Render {
                template: name.to_string(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use base16_core::SchemeDocument;
    use tempfile::TempDir;

    use crate::context::base_key;

    fn template(name: &str) -> Template {
        Template {
            name: name.to_string(),
            extension: ".conf".to_string(),
            output: PathBuf::from("out"),
        }
    }

    fn set(bodies: &[(&str, &str)]) -> Result<TemplateSet, RenderError> {
        TemplateSet::from_sources(
            bodies
                .iter()
                .map(|(name, body)| {
                    (template(name), PathBuf::from(format!("{name}.mustache")), body.to_string())
                })
                .collect(),
        )
    }

    fn context() -> SchemeContext {
        let mut doc = SchemeDocument::new();
        doc.insert("scheme".into(), "Tom & Jerry".into());
        doc.insert("author".into(), "Jane".into());
        for i in 0..16 {
            doc.insert(base_key(i), format!("#{:06x}", i * 0x111111));
        }
        SchemeContext::build(&doc).expect("context")
    }

    #[test]
    fn renders_simple_substitution() {
        let set = set(&[("cfg", "c0={{base00-hex}} cF={{base0F-hex}}")]).expect("compile");
        let out = set.render("cfg", &context()).expect("render");
        assert_eq!(out, "c0=000000 cF=ffffff");
    }

    #[test]
    fn double_braces_escape_but_triple_braces_do_not() {
        let set = set(&[("cfg", "{{scheme-name}}|{{{scheme-name}}}")]).expect("compile");
        let out = set.render("cfg", &context()).expect("render");
        assert_eq!(out, "Tom &amp; Jerry|Tom & Jerry");
    }

    #[test]
    fn escaping_leaves_urls_intact() {
        let mut doc = SchemeDocument::new();
        doc.insert("scheme".into(), "Base16 Default".into());
        doc.insert(
            "author".into(),
            "Chris Kempson's <b> (http://chriskempson.com)".into(),
        );
        for i in 0..16 {
            doc.insert(base_key(i), "181818".into());
        }
        let ctx = SchemeContext::build(&doc).expect("context");
        let set = set(&[("cfg", "# Scheme author: {{scheme-author}}")]).expect("compile");
        assert_eq!(
            set.render("cfg", &ctx).expect("render"),
            "# Scheme author: Chris Kempson&#39;s &lt;b&gt; (http://chriskempson.com)"
        );
    }

    #[test]
    fn endraw_text_in_body_renders_verbatim() {
        let set = set(&[("cfg", "x {% endraw %} {{base00-hex}} {%raw%}")]).expect("compile");
        let out = set.render("cfg", &context()).expect("render");
        assert_eq!(out, "x {% endraw %} 000000 {%raw%}");
    }

    #[test]
    fn standalone_comment_line_leaves_no_blank_line() {
        let body = "# header\n{{! generated }}\ncolor={{base01-hex}}\n";
        let set = set(&[("cfg", body)]).expect("compile");
        let out = set.render("cfg", &context()).expect("render");
        assert_eq!(out, "# header\ncolor=111111\n");
    }

    #[test]
    fn html_named_template_is_not_autoescaped() {
        let set = set(&[("page.html", "{{{scheme-name}}}")]).expect("compile");
        let out = set.render("page.html", &context()).expect("render");
        assert_eq!(out, "Tom & Jerry");
    }

    #[test]
    fn literal_braces_survive_rendering() {
        let body = "for c in ${colors[@]}; do echo {{base01-hex}}; done {# not a comment #}\n";
        let set = set(&[("sh", body)]).expect("compile");
        let out = set.render("sh", &context()).expect("render");
        assert_eq!(
            out,
            "for c in ${colors[@]}; do echo 111111; done {# not a comment #}\n"
        );
    }

    #[test]
    fn undefined_key_is_a_render_error() {
        let set = set(&[("cfg", "{{base10-hex}}")]).expect("compile");
        let err = set.render("cfg", &context()).unwrap_err();
        assert!(matches!(err, RenderError::Render { .. }), "got: {err}");
        assert!(err.to_string().contains("'cfg'"));
    }

    #[test]
    fn one_bad_body_fails_the_whole_set() {
        let err = set(&[("good", "{{base00-hex}}"), ("bad", "{{#section}}{{/section}}")])
            .err()
            .expect("compile must fail");
        match err {
            RenderError::Syntax { template, path, .. } => {
                assert_eq!(template, "bad");
                assert_eq!(path, PathBuf::from("bad.mustache"));
            }
            other => panic!("expected Syntax, got: {other}"),
        }
    }

    #[test]
    fn unknown_template_is_rejected() {
        let set = set(&[("cfg", "x")]).expect("compile");
        let err = set.render("other", &context()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(_)));
    }

    #[test]
    fn compile_reads_bodies_from_templates_dir() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("cfg.mustache"), "name={{scheme-author}}").expect("write");
        let set = TemplateSet::compile(dir.path(), vec![template("cfg")]).expect("compile");
        assert_eq!(set.len(), 1);
        assert_eq!(set.render("cfg", &context()).expect("render"), "name=Jane");
    }

    #[test]
    fn compile_reports_missing_body() {
        let dir = TempDir::new().expect("tempdir");
        let err = TemplateSet::compile(dir.path(), vec![template("absent")])
            .err()
            .expect("compile must fail");
        match err {
            RenderError::Io { path, .. } => assert!(path.ends_with("absent.mustache")),
            other => panic!("expected Io, got: {other}"),
        }
    }
}
