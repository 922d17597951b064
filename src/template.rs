use liquid::{Parser, ParserBuilder};
use liquid_core::Object;

use crate::error::GenerateError;
use crate::project_properties::ProjectProperties;
use crate::template_filters::SnakeCaseFilterParser;

/// Templates shipped inside the binary, keyed by the file they produce.
const EMBEDDED: [(&str, &str); 7] = [
    ("package.json", include_str!("../template/package.json.liquid")),
    (".gitignore", include_str!("../template/.gitignore.liquid")),
    ("README.md", include_str!("../template/README.md.liquid")),
    ("lib/index.js", include_str!("../template/lib/index.js.liquid")),
    ("native/build.rs", include_str!("../template/native/build.rs.liquid")),
    (
        "native/Cargo.toml",
        include_str!("../template/native/Cargo.toml.liquid"),
    ),
    (
        "native/src/lib.rs",
        include_str!("../template/native/src/lib.rs.liquid"),
    ),
];

/// Turns a manifest entry into file content.
pub trait Render {
    fn render(&self, key: &str, props: &ProjectProperties) -> Result<String, GenerateError>;
}

pub fn create_liquid_engine() -> Result<Parser, liquid_core::Error> {
    ParserBuilder::with_stdlib()
        .filter(SnakeCaseFilterParser)
        .build()
}

pub struct LiquidRenderer<'a> {
    parser: Parser,
    templates: &'a [(&'a str, &'a str)],
}

impl LiquidRenderer<'static> {
    pub fn new() -> Result<Self, GenerateError> {
        Self::with_templates(&EMBEDDED)
    }
}

impl<'a> LiquidRenderer<'a> {
    pub fn with_templates(templates: &'a [(&'a str, &'a str)]) -> Result<Self, GenerateError> {
        let parser = create_liquid_engine().map_err(GenerateError::template("*"))?;
        Ok(Self { parser, templates })
    }

    fn source(&self, key: &str) -> Result<&'a str, GenerateError> {
        self.templates
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, content)| *content)
            .ok_or_else(|| GenerateError::TemplateNotFound {
                key: key.to_string(),
            })
    }
}

impl Render for LiquidRenderer<'_> {
    fn render(&self, key: &str, props: &ProjectProperties) -> Result<String, GenerateError> {
        let template = self
            .parser
            .parse(self.source(key)?)
            .map_err(GenerateError::template(key))?;
        let globals = create_liquid_object(props).map_err(GenerateError::template(key))?;
        template
            .render(&globals)
            .map_err(GenerateError::template(key))
    }
}

/// `{ project: <props> }`, the only binding templates get.
pub fn create_liquid_object(props: &ProjectProperties) -> Result<Object, liquid_core::Error> {
    let mut liquid_object = Object::new();
    liquid_object.insert("project".into(), liquid_core::model::to_value(props)?);
    Ok(liquid_object)
}
