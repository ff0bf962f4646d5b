use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    UniformCost,
    DepthFirst,
}

impl Method {
    pub const NAMES: [&'static str; 2] = ["uniform-cost", "depth-first"];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::UniformCost => write!(f, "uniform-cost"),
            Method::DepthFirst => write!(f, "depth-first"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown algorithm: {} (expected one of: {})",
            self.0,
            Method::NAMES.join(", ")
        )
    }
}

impl Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform-cost" => Ok(Method::UniformCost),
            "depth-first" => Ok(Method::DepthFirst),
            _ => Err(UnknownMethod(s.to_owned())),
        }
    }
}
