use super::Tool;
use crate::error::Error;
use crate::runner::{Binary, Exec};

const STEPS: [[&str; 3]; 3] = [
    ["container", "prune", "-f"],
    ["volume", "prune", "-f"],
    ["image", "prune", "-f"],
];

/// Remove stopped containers, then unused volumes, then dangling images.
pub struct PruneTool;

impl Tool for PruneTool {
    fn run(&self, exec: &dyn Exec) -> Result<String, Error> {
        let mut outputs = Vec::with_capacity(STEPS.len());
        for step in STEPS {
            let args: Vec<String> = step.iter().map(|s| s.to_string()).collect();
            outputs.push(exec.run(Binary::Docker, &args)?.combined());
        }
        Ok(outputs.join("\n"))
    }
}
