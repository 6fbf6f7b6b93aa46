use ftd_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "FTD consolidation failed.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ftd_client::ClientError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = ClientError::snapshot_write_failed(Path::new("/ro/out.csv"), "read-only");

        let rendered = render_error(&error);
        assert!(rendered.starts_with("FTD consolidation failed."));
        assert!(rendered.contains("  Error:    snapshot_write_failed"));
        assert!(rendered.contains("  Details:  Could not write CSV snapshot to `/ro/out.csv`"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. Grant write access to `/ro/out.csv`"));
    }

    #[test]
    fn falls_back_to_retry_step() {
        let error = ClientError::internal_serialization("boom");
        let rendered = render_error(&error);
        assert!(rendered.contains("  1. Retry the command."));
    }
}
