use std::collections::BTreeMap;

use minijinja::{Environment, UndefinedBehavior};

use crate::error::{ParseError, TemplateError};
use crate::utils::kv::split_equality;

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    // Unknown names (and attributes of them) render as empty strings.
    env.set_undefined_behavior(UndefinedBehavior::Chainable);
    env.set_keep_trailing_newline(true);
    env
}

/// Renders `input` as a template against an explicit variable map.
pub fn render_template(
    input: &[u8],
    vars: &BTreeMap<String, String>,
) -> Result<Vec<u8>, TemplateError> {
    let parse_failed = |source: ParseError| TemplateError::Parse {
        source,
        original: input.to_vec(),
    };
    let source = std::str::from_utf8(input).map_err(|e| parse_failed(e.into()))?;
    let env = environment();
    let template = env
        .template_from_str(source)
        .map_err(|e| parse_failed(ParseError::Template(e)))?;

    let mut out = Vec::with_capacity(input.len());
    match template.render_captured_to(vars, &mut out) {
        Ok(_) => Ok(out),
        Err(e) => Err(TemplateError::Render {
            source: e.into(),
            partial: out,
        }),
    }
}

/// Renders `input` against the current process environment.
pub fn env_parser(input: &[u8]) -> Result<Vec<u8>, TemplateError> {
    let environ = std::env::vars_os().map(|(name, value)| {
        format!("{}={}", name.to_string_lossy(), value.to_string_lossy())
    });
    render_template(input, &split_equality(environ))
}
