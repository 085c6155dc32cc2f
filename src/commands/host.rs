use std::io::{BufRead, Write};

/// Abstract the host environment to enable testing
pub trait Host: Send + Sync {
    // where to send normal output (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where to send error output (e.g., stderr)
    fn error(&mut self) -> impl Write;

    // where interactive commands are read from (e.g., stdin)
    fn input(&mut self) -> impl BufRead;

    /// Terminate the process (although in a test environment this might just set a flag and return).
    fn exit(&mut self, code: i32);
}

/// Test host that captures output to in-memory buffers and replays scripted input
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub input_buf: std::io::Cursor<Vec<u8>>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn new() -> Self {
        Self::with_input("")
    }

    pub fn with_input(script: &str) -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            input_buf: std::io::Cursor::new(script.as_bytes().to_vec()),
            exit_code: None,
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn input(&mut self) -> impl BufRead {
        &mut self.input_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
