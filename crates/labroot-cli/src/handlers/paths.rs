//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics and debugging.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Render the resolved layout as `key = value` lines or pretty JSON.
pub fn render(ctx: &CliContext, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&ctx.project)?)
    } else {
        Ok(ctx.project.to_string())
    }
}

/// Execute the paths command.
///
/// Never touches the filesystem beyond resolution.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    println!("{}", render(ctx, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context_at;
    use tempfile::tempdir;

    #[test]
    fn text_output_lists_every_directory() {
        let temp = tempdir().unwrap();
        let ctx = context_at(temp.path());

        let output = render(&ctx, false).unwrap();

        for key in ["base_dir", "data_dir", "data_raw", "data_processed", "models_dir", "outputs_dir"] {
            assert!(output.contains(&format!("{key} = ")), "missing {key}");
        }
        assert!(output.contains("base_source = explicit"));
        assert!(!ctx.paths().data_dir().exists());
    }

    #[test]
    fn json_output_is_machine_readable() {
        let temp = tempdir().unwrap();
        let ctx = context_at(temp.path());

        let output = render(&ctx, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["base_source"], "explicit");
        assert_eq!(
            value["paths"]["outputs_dir"],
            ctx.paths().outputs_dir().to_string_lossy().as_ref()
        );
    }
}
