//! Abstract to native enumeration translation.
//!
//! Each backend builds an [`EnumTable`] mapping every [`Enum`] to its native code when it’s
//! created. The table is validated for completeness at that moment: a missing entry is a fatal
//! initialization error, never something discovered while reconciling state.

use log::debug;
use std::error;
use std::fmt;

use crate::enums::Enum;

/// A complete, validated lookup table from abstract enumerations to native codes.
#[derive(Clone, Debug)]
pub struct EnumTable<N> {
  codes: Vec<N>,
}

impl<N> EnumTable<N>
where
  N: Copy + fmt::Debug,
{
  /// Start building a new table.
  pub fn builder() -> EnumTableBuilder<N> {
    EnumTableBuilder {
      codes: vec![None; Enum::COUNT],
      duplicate: None,
    }
  }

  /// Native code of an abstract enumeration.
  pub fn get<E>(&self, e: E) -> N
  where
    E: Into<Enum>,
  {
    // the table is complete by construction
    self.codes[e.into().index()]
  }
}

/// Builder of [`EnumTable`].
#[derive(Debug)]
pub struct EnumTableBuilder<N> {
  codes: Vec<Option<N>>,
  duplicate: Option<Enum>,
}

impl<N> EnumTableBuilder<N>
where
  N: Copy + fmt::Debug,
{
  /// Register the native code of an abstract enumeration.
  ///
  /// Registering the same enumeration twice is reported by [`EnumTableBuilder::build`].
  pub fn put<E>(mut self, e: E, code: N) -> Self
  where
    E: Into<Enum>,
  {
    let e = e.into();
    let slot = &mut self.codes[e.index()];

    if slot.is_some() && self.duplicate.is_none() {
      self.duplicate = Some(e);
    }

    *slot = Some(code);
    self
  }

  /// Validate the table.
  ///
  /// Fails if any abstract enumeration was registered twice or not at all.
  pub fn build(self) -> Result<EnumTable<N>, EnumTableError> {
    if let Some(e) = self.duplicate {
      return Err(EnumTableError::Duplicate(e));
    }

    let missing: Vec<Enum> = Enum::all()
      .filter(|e| self.codes[e.index()].is_none())
      .collect();

    if !missing.is_empty() {
      return Err(EnumTableError::Missing(missing));
    }

    let codes: Vec<N> = self.codes.into_iter().flatten().collect();
    debug!("enum table complete ({} entries)", codes.len());

    Ok(EnumTable { codes })
  }
}

/// Errors that might occur while validating an [`EnumTable`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EnumTableError {
  /// Those enumerations have no native code.
  Missing(Vec<Enum>),
  /// This enumeration was registered more than once.
  Duplicate(Enum),
}

impl fmt::Display for EnumTableError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      EnumTableError::Missing(ref missing) => {
        write!(f, "missing native enumerations: ")?;

        for (i, e) in missing.iter().enumerate() {
          if i > 0 {
            f.write_str(", ")?;
          }

          write!(f, "{:?}", e)?;
        }

        Ok(())
      }

      EnumTableError::Duplicate(ref e) => write!(f, "native enumeration registered twice: {:?}", e),
    }
  }
}

impl error::Error for EnumTableError {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::enums::{BlendEquation, Feature, Orientation};

  fn full_builder() -> EnumTableBuilder<u32> {
    Enum::all().fold(EnumTable::builder(), |builder, e| {
      builder.put(e, 0x1000 + e.index() as u32)
    })
  }

  #[test]
  fn complete_table_translates_everything() {
    let table = full_builder().build().unwrap();

    for e in Enum::all() {
      assert_eq!(table.get(e), 0x1000 + e.index() as u32);
    }

    assert_eq!(
      table.get(Orientation::CW),
      0x1000 + Enum::Orientation(Orientation::CW).index() as u32
    );
  }

  #[test]
  fn missing_entries_are_reported() {
    let mut builder = EnumTable::builder();

    for e in Enum::all() {
      if e != Enum::Feature(Feature::Dither) && e != Enum::BlendEquation(BlendEquation::FuncAdd) {
        builder = builder.put(e, 1u32);
      }
    }

    assert_eq!(
      builder.build().unwrap_err(),
      EnumTableError::Missing(vec![
        Enum::Feature(Feature::Dither),
        Enum::BlendEquation(BlendEquation::FuncAdd)
      ])
    );
  }

  #[test]
  fn duplicate_entries_are_reported() {
    let err = full_builder().put(Feature::Blend, 3).build().unwrap_err();
    assert_eq!(err, EnumTableError::Duplicate(Enum::Feature(Feature::Blend)));
  }

  #[test]
  fn missing_display_lists_names() {
    let err = EnumTableError::Missing(vec![Enum::Feature(Feature::Blend)]);
    assert_eq!(err.to_string(), "missing native enumerations: Feature(Blend)");
  }
}
