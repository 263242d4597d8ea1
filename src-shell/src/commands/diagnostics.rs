use super::CommandResult;

pub fn frontend_ready() -> CommandResult<()> {
    tracing::info!("Frontend ready");
    CommandResult::ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_ready() {
        let result = frontend_ready();
        assert!(result.success);
        assert!(result.error.is_none());
    }
}
