use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json | OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a list: a JSON array, or one compact document per line for `raw`.
pub fn render_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => render(&items, format, pretty),
        OutputFormat::Raw => {
            let lines = items
                .iter()
                .map(serde_json::to_string)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(lines.join("\n"))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> anyhow::Result<()> {
    let rendered = render(value, format, pretty)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list in the requested format.
pub fn output_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    let rendered = render_list(items, format, pretty)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
