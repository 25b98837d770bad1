//! Human readable rendering of parsed arguments, for diagnostics only.

use core::fmt;

use crate::parser::ParsedArgs;

impl fmt::Display for ParsedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Args=[")?;

        for (i, (name, value)) in self.args().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            match value {
                Some(value) => write!(f, "{name}={value}")?,
                None => f.write_str(name)?,
            }
        }

        f.write_str("]; Params=[")?;

        for (i, param) in self.params().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            f.write_str(param)?;
        }

        f.write_str("]")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParsedArgs {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Args=[");

        for (i, (name, value)) in self.args().iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }

            match value {
                Some(value) => defmt::write!(f, "{=str}={=str}", name.as_str(), value.as_str()),
                None => defmt::write!(f, "{=str}", name.as_str()),
            }
        }

        defmt::write!(f, "]; Params=[");

        for (i, param) in self.params().iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }

            defmt::write!(f, "{=str}", param.as_str());
        }

        defmt::write!(f, "]");
    }
}
