use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ProtomixError::missing_member("greet")
            .to_string()
            .contains("missing member:")
    );
    assert!(
        ProtomixError::not_callable("name")
            .to_string()
            .contains("member is not callable:")
    );
    assert!(
        ProtomixError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        ProtomixError::depth_exceeded(4).to_string(),
        "merge depth exceeded: limit 4"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ProtomixError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn fails() -> ProtomixResult<()> {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("inner failure"));
        inner?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, ProtomixError::Other(_)));
    assert_eq!(err.to_string(), "inner failure");
}
