use std::io;

use create_mcp_server::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_interrupted_prompt_is_user_abort() {
    let err: Error =
        dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "interrupted")).into();
    assert!(matches!(err, Error::UserAbort));

    let err: Error =
        dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "closed")).into();
    assert!(matches!(err, Error::PromptError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::OutputDirectoryExistsError { output_dir: "weather".to_string() };
    assert_eq!(
        err.to_string(),
        "Cannot proceed: output directory 'weather' already exists."
    );

    let err = Error::MissingEnvVarError { name: "APPDATA".to_string() };
    assert_eq!(err.to_string(), "Environment variable 'APPDATA' is not set.");
}
