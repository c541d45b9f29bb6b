use serde::{Serialize, Deserialize};
use std::convert::Infallible;
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to the perceptron's weighted sum.
///
/// Selected once at construction.  Serialized as its canonical selector
/// string (`"linear"`, `"step"`, `"sigmoid"`, `"relu"`, `"tanh"`) and
/// deserialized leniently: any selector that is not recognized becomes
/// `Sigmoid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivationFunction {
    Linear,
    /// Hard threshold: `1` when `x >= 0`, else `0`.
    Step,
    #[default]
    Sigmoid,
    ReLU,
    Tanh,
}

impl ActivationFunction {
    pub const ALL: [ActivationFunction; 5] = [
        ActivationFunction::Linear,
        ActivationFunction::Step,
        ActivationFunction::Sigmoid,
        ActivationFunction::ReLU,
        ActivationFunction::Tanh,
    ];

    /// Resolves a selector string.  Matching is case-insensitive and accepts a
    /// few aliases; unknown selectors fall back to `Sigmoid` without error.
    pub fn from_selector(selector: &str) -> ActivationFunction {
        match selector.trim().to_ascii_lowercase().as_str() {
            "linear" | "lineal" | "identity" => ActivationFunction::Linear,
            "step" | "escalon" | "heaviside" => ActivationFunction::Step,
            "sigmoid" | "logistic" => ActivationFunction::Sigmoid,
            "relu" => ActivationFunction::ReLU,
            "tanh" | "hyperbolic_tangent" => ActivationFunction::Tanh,
            other => {
                tracing::debug!(selector = other, "unrecognized activation, using sigmoid");
                ActivationFunction::Sigmoid
            }
        }
    }

    /// Canonical selector string.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Linear => "linear",
            ActivationFunction::Step => "step",
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Tanh => "tanh",
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => x,
            ActivationFunction::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Derivative with respect to the weighted sum.  Only the gradient update
    /// rule uses it; the default delta rule ignores the activation shape.
    ///
    /// `Step` has no useful derivative, so it passes the error straight
    /// through (`1.0`) and the gradient rule degenerates to the delta rule.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Linear => 1.0,
            ActivationFunction::Step => 1.0,
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ActivationFunction::from_selector(s))
    }
}

impl From<&str> for ActivationFunction {
    fn from(selector: &str) -> Self {
        ActivationFunction::from_selector(selector)
    }
}

impl From<String> for ActivationFunction {
    fn from(selector: String) -> Self {
        ActivationFunction::from_selector(&selector)
    }
}

impl From<ActivationFunction> for String {
    fn from(activation: ActivationFunction) -> Self {
        activation.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn values_at_zero() {
        assert_eq!(ActivationFunction::Linear.function(0.0), 0.0);
        assert_eq!(ActivationFunction::Step.function(0.0), 1.0);
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert_eq!(ActivationFunction::ReLU.function(0.0), 0.0);
        assert_eq!(ActivationFunction::Tanh.function(0.0), 0.0);
    }

    #[test]
    fn representative_points() {
        assert_eq!(ActivationFunction::Linear.function(-2.5), -2.5);
        assert_eq!(ActivationFunction::Step.function(-1e-9), 0.0);
        assert_eq!(ActivationFunction::Step.function(3.0), 1.0);
        assert_eq!(ActivationFunction::ReLU.function(-3.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.function(3.0), 3.0);
        assert!((ActivationFunction::Tanh.function(1.0) - 1.0_f64.tanh()).abs() < EPS);

        let s = ActivationFunction::Sigmoid.function(2.0);
        assert!((s - 1.0 / (1.0 + (-2.0_f64).exp())).abs() < EPS);
        let s_neg = ActivationFunction::Sigmoid.function(-2.0);
        assert!((s + s_neg - 1.0).abs() < EPS);
    }

    #[test]
    fn selectors_and_aliases() {
        assert_eq!(ActivationFunction::from_selector("linear"), ActivationFunction::Linear);
        assert_eq!(ActivationFunction::from_selector("lineal"), ActivationFunction::Linear);
        assert_eq!(ActivationFunction::from_selector("Escalon"), ActivationFunction::Step);
        assert_eq!(ActivationFunction::from_selector(" STEP "), ActivationFunction::Step);
        assert_eq!(ActivationFunction::from_selector("relu"), ActivationFunction::ReLU);
        assert_eq!(ActivationFunction::from_selector("hyperbolic_tangent"), ActivationFunction::Tanh);
        for activation in ActivationFunction::ALL {
            assert_eq!(ActivationFunction::from_selector(activation.name()), activation);
        }
    }

    #[test]
    fn unknown_selector_behaves_like_sigmoid() {
        let unknown: ActivationFunction = "softplus".parse().unwrap();
        assert_eq!(unknown, ActivationFunction::Sigmoid);
        assert_eq!(ActivationFunction::from_selector(""), ActivationFunction::Sigmoid);
        for x in [-5.0, -0.3, 0.0, 0.7, 4.0] {
            assert_eq!(unknown.function(x), ActivationFunction::Sigmoid.function(x));
        }
    }

    #[test]
    fn serde_uses_selector_strings() {
        let json = serde_json::to_string(&ActivationFunction::ReLU).unwrap();
        assert_eq!(json, "\"relu\"");
        let parsed: ActivationFunction = serde_json::from_str("\"escalon\"").unwrap();
        assert_eq!(parsed, ActivationFunction::Step);
        let fallback: ActivationFunction = serde_json::from_str("\"mystery\"").unwrap();
        assert_eq!(fallback, ActivationFunction::Sigmoid);
    }

    #[test]
    fn derivatives() {
        assert_eq!(ActivationFunction::Sigmoid.derivative(0.0), 0.25);
        assert_eq!(ActivationFunction::Tanh.derivative(0.0), 1.0);
        assert_eq!(ActivationFunction::ReLU.derivative(-1.0), 0.0);
        assert_eq!(ActivationFunction::ReLU.derivative(2.0), 1.0);
        assert_eq!(ActivationFunction::Linear.derivative(7.0), 1.0);
        assert_eq!(ActivationFunction::Step.derivative(-7.0), 1.0);
    }
}
