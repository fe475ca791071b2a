use crate::core::arithmetic::{add, Calculator};
use crate::core::{ConfigProvider, Evaluation, Operation, OutputFormat, Result};

pub struct CalcEngine<C: ConfigProvider> {
    calculator: Calculator,
    config: C,
}

impl<C: ConfigProvider> CalcEngine<C> {
    pub fn new(config: C) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn evaluate(&self, operation: Operation, lhs: f64, rhs: f64) -> Evaluation {
        let result = match operation {
            Operation::Add => add(lhs, rhs),
            Operation::Multiply => self.calculator.multiply(lhs, rhs),
        };

        tracing::debug!(%operation, lhs, rhs, result, "evaluated");

        Evaluation {
            operation,
            lhs,
            rhs,
            result,
        }
    }

    pub fn render(&self, evaluation: &Evaluation) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(format!(
                "{} {} {} = {}",
                evaluation.lhs,
                evaluation.operation.symbol(),
                evaluation.rhs,
                evaluation.result
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
        }
    }

    pub fn run(&self, operation: Operation, lhs: f64, rhs: f64) -> Result<String> {
        let evaluation = self.evaluate(operation, lhs, rhs);
        self.render(&evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedConfig(OutputFormat);

    impl ConfigProvider for FixedConfig {
        fn output_format(&self) -> OutputFormat {
            self.0
        }

        fn verbose(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_evaluate_dispatches() {
        let engine = CalcEngine::new(FixedConfig(OutputFormat::Text));
        assert_eq!(engine.evaluate(Operation::Add, 2.0, 3.0).result, 5.0);
        assert_eq!(engine.evaluate(Operation::Multiply, 4.0, 5.0).result, 20.0);
    }

    #[test]
    fn test_render_text() {
        let engine = CalcEngine::new(FixedConfig(OutputFormat::Text));
        assert_eq!(engine.run(Operation::Add, 2.0, 3.0).unwrap(), "2 + 3 = 5");
        assert_eq!(
            engine.run(Operation::Multiply, -1.5, 2.0).unwrap(),
            "-1.5 * 2 = -3"
        );
    }

    #[test]
    fn test_render_json() {
        let engine = CalcEngine::new(FixedConfig(OutputFormat::Json));
        let output = engine.run(Operation::Multiply, 4.0, 5.0).unwrap();
        let parsed: Evaluation = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.operation, Operation::Multiply);
        assert_eq!(parsed.result, 20.0);
    }

    #[test]
    fn test_render_json_non_finite_is_null() {
        // serde_json writes non-finite floats as null
        let engine = CalcEngine::new(FixedConfig(OutputFormat::Json));
        let output = engine.run(Operation::Add, f64::INFINITY, 1.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["result"].is_null());
    }
}
