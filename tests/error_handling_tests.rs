use std::error::Error;

use morsecom::{MorseComError, MorseComResult};

/// Error handling and resilience tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    fn connect_error(port: &str) -> MorseComError {
        MorseComError::Connect {
            port: port.to_string(),
            source: serialport::Error::new(serialport::ErrorKind::NoDevice, "no such device"),
        }
    }

    #[test]
    fn test_error_types() {
        let errors = vec![
            connect_error("COM3"),
            MorseComError::UnknownPort("COM9".to_string()),
            MorseComError::Config {
                message: "Config error".to_string(),
            },
            MorseComError::InvalidInput("Invalid input".to_string()),
            MorseComError::Output("Output error".to_string()),
            MorseComError::Io(std::io::Error::new(std::io::ErrorKind::Other, "io")),
        ];

        for error in errors {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");
        }

        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MorseComError>();
    }

    #[test]
    fn test_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: MorseComError = io_error.into();
        assert!(matches!(error, MorseComError::Io(_)));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_result_type() {
        fn success_function() -> MorseComResult<String> {
            Ok("success".to_string())
        }

        fn error_function() -> MorseComResult<String> {
            Err(MorseComError::Config {
                message: "Test error".to_string(),
            })
        }

        let success = success_function();
        assert!(success.is_ok());
        assert_eq!(success.unwrap(), "success");

        let error = error_function();
        assert!(error.is_err());
        assert!(error.unwrap_err().to_string().contains("Config"));
    }

    #[test]
    fn test_connect_error_keeps_its_cause() {
        let error = connect_error("/dev/ttyUSB0");

        let mut current: &dyn Error = &error;
        let mut depth = 0;
        while let Some(source) = current.source() {
            current = source;
            depth += 1;
            if depth > 10 {
                break;
            }
        }

        assert!(depth > 0, "Connect errors must expose the open failure");
        assert!(current.to_string().contains("no such device"));
    }

    #[test]
    fn test_error_formatting() {
        let error = connect_error("/dev/ttyUSB0");

        let display = format!("{}", error);
        let debug = format!("{:?}", error);

        assert!(display.contains("Failed to open port"));
        assert!(display.contains("/dev/ttyUSB0"));
        assert!(!debug.is_empty());
        assert_ne!(display, debug);
    }

    #[tokio::test]
    async fn test_async_error_propagation() {
        async fn failing_async_function() -> MorseComResult<()> {
            Err(MorseComError::InvalidInput(
                "Async operation failed".to_string(),
            ))
        }

        async fn calling_function() -> MorseComResult<()> {
            failing_async_function().await?;
            Ok(())
        }

        let result = calling_function().await;
        assert!(result.is_err());

        let error = result.unwrap_err();
        assert!(error.to_string().contains("Invalid input"));
        assert!(error.to_string().contains("Async operation failed"));
    }

    #[test]
    fn test_error_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let error = Arc::new(MorseComError::Config {
            message: "Thread safety test".to_string(),
        });

        let handles: Vec<_> = (0..5)
            .map(|i| {
                let error_clone = Arc::clone(&error);
                thread::spawn(move || {
                    let display = format!("Thread {}: {}", i, error_clone);
                    assert!(display.contains("Thread safety test"));
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("Thread panicked");
        }
    }

    #[test]
    fn test_error_size() {
        use std::mem;

        let error_size = mem::size_of::<MorseComError>();
        assert!(error_size <= 128, "MorseComError too large: {} bytes", error_size);
    }
}
