use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported record type: '{0}'")]
pub struct ParseRecordTypeError(String);

/// The closed set of KEGG database record types.
///
/// [`RecordType::Unknown`] is the sentinel used when a record carries no type
/// or a type outside the supported set; it has no registered field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum RecordType {
    Pathway,
    Brite,
    Module,
    Orthology,
    Genome,
    Genes,
    Compound,
    Glycan,
    Reaction,
    Rclass,
    Enzyme,
    Network,
    Variant,
    Disease,
    Drug,
    Dgroup,
    #[default]
    Unknown,
}

impl RecordType {
    /// Every supported type, in KEGG database listing order.
    pub const ALL: [RecordType; 16] = [
        RecordType::Pathway,
        RecordType::Brite,
        RecordType::Module,
        RecordType::Orthology,
        RecordType::Genome,
        RecordType::Genes,
        RecordType::Compound,
        RecordType::Glycan,
        RecordType::Reaction,
        RecordType::Rclass,
        RecordType::Enzyme,
        RecordType::Network,
        RecordType::Variant,
        RecordType::Disease,
        RecordType::Drug,
        RecordType::Dgroup,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RecordType::Pathway => "pathway",
            RecordType::Brite => "brite",
            RecordType::Module => "module",
            RecordType::Orthology => "orthology",
            RecordType::Genome => "genome",
            RecordType::Genes => "genes",
            RecordType::Compound => "compound",
            RecordType::Glycan => "glycan",
            RecordType::Reaction => "reaction",
            RecordType::Rclass => "rclass",
            RecordType::Enzyme => "enzyme",
            RecordType::Network => "network",
            RecordType::Variant => "variant",
            RecordType::Disease => "disease",
            RecordType::Drug => "drug",
            RecordType::Dgroup => "dgroup",
            RecordType::Unknown => "unknown",
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, RecordType::Unknown)
    }

    /// Parses a type name, mapping anything unrecognized to [`RecordType::Unknown`].
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordType {
    type Err = ParseRecordTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "pathway" => Ok(RecordType::Pathway),
            "brite" => Ok(RecordType::Brite),
            "module" => Ok(RecordType::Module),
            "orthology" | "ko" => Ok(RecordType::Orthology),
            "genome" => Ok(RecordType::Genome),
            "genes" | "gene" => Ok(RecordType::Genes),
            "compound" => Ok(RecordType::Compound),
            "glycan" => Ok(RecordType::Glycan),
            "reaction" => Ok(RecordType::Reaction),
            "rclass" => Ok(RecordType::Rclass),
            "enzyme" => Ok(RecordType::Enzyme),
            "network" => Ok(RecordType::Network),
            "variant" => Ok(RecordType::Variant),
            "disease" => Ok(RecordType::Disease),
            "drug" => Ok(RecordType::Drug),
            "dgroup" => Ok(RecordType::Dgroup),
            "unknown" => Ok(RecordType::Unknown),
            _ => Err(ParseRecordTypeError(s.to_string())),
        }
    }
}

/// How a field is emitted, beyond the shape of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Amino-acid or nucleotide data, chunked at the sequence width.
    Sequence,
    /// Pre-rendered chemical-structure text (KCF atom/bond/node/edge blocks).
    Structure,
    /// Pre-rendered hierarchy trees (BRITE).
    Hierarchy,
    /// One or more bibliographic references.
    Reference,
    Standard,
}

impl FieldClass {
    #[inline]
    pub fn is_special(&self) -> bool {
        !matches!(self, FieldClass::Standard)
    }
}

impl fmt::Display for FieldClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldClass::Sequence => write!(f, "sequence"),
            FieldClass::Structure => write!(f, "structure"),
            FieldClass::Hierarchy => write!(f, "hierarchy"),
            FieldClass::Reference => write!(f, "reference"),
            FieldClass::Standard => write!(f, "standard"),
        }
    }
}
