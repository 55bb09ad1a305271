use super::Tool;
use crate::error::Error;
use crate::runner::{Binary, Exec};

/// Scale an app to zero, then back to one.
pub struct RestartTool {
    app: String,
}

impl RestartTool {
    pub fn new(app: String) -> Self {
        Self { app }
    }
}

impl Tool for RestartTool {
    fn run(&self, exec: &dyn Exec) -> Result<String, Error> {
        let mut outputs = Vec::with_capacity(2);
        for replicas in [0, 1] {
            let args = vec!["scale".to_string(), format!("{}={replicas}", self.app)];
            outputs.push(exec.run(Binary::Compose, &args)?.combined());
        }
        Ok(outputs.join("\n"))
    }
}
