use heck::ToSnakeCase;
use liquid_core::{Filter, Result, Runtime, Value, ValueView};
use liquid_derive::{Display_filter, FilterReflection, ParseFilter};

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "snake_case",
    description = "Change text to snake_case.",
    parsed(SnakeCaseFilter)
)]
pub struct SnakeCaseFilterParser;

#[derive(Debug, Default, Display_filter)]
#[name = "snake_case"]
struct SnakeCaseFilter;

impl Filter for SnakeCaseFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
        let input = scalar_string(input)?;
        Ok(Value::scalar(input.to_snake_case()))
    }
}

fn scalar_string(input: &dyn ValueView) -> Result<String> {
    let input = input
        .as_scalar()
        .ok_or_else(|| liquid_core::Error::with_msg("String expected"))?;
    Ok(input.to_kstr().to_string())
}
