pub(super) const SEQUENCE_FIELDS: &[&str] = &["aaseq", "ntseq"];
pub(super) const STRUCTURE_FIELDS: &[&str] = &["atom", "bond", "bracket", "node", "edge"];
pub(super) const HIERARCHY_FIELDS: &[&str] = &["brite", "hierarchy"];
pub(super) const REFERENCE_FIELDS: &[&str] = &["reference"];

pub(super) const PATHWAY: &[&str] = &[
    "entry",
    "name",
    "description",
    "class",
    "pathway_map",
    "module",
    "network",
    "element",
    "disease",
    "drug",
    "dblinks",
    "organism",
    "gene",
    "orthology",
    "compound",
    "reference",
    "ko_pathway",
    "rel_pathway",
];

pub(super) const BRITE: &[&str] = &["entry", "name", "definition", "description", "hierarchy", "reference"];

pub(super) const MODULE: &[&str] = &[
    "entry",
    "name",
    "definition",
    "orthology",
    "class",
    "pathway",
    "reaction",
    "compound",
    "comment",
    "brite",
    "reference",
    "dblinks",
];

pub(super) const ORTHOLOGY: &[&str] = &[
    "entry",
    "symbol",
    "name",
    "pathway",
    "module",
    "network",
    "disease",
    "brite",
    "dblinks",
    "genes",
    "reference",
];

pub(super) const GENOME: &[&str] = &[
    "entry",
    "name",
    "definition",
    "annotation",
    "taxonomy",
    "data_source",
    "original_db",
    "keywords",
    "disease",
    "comment",
    "chromosome",
    "plasmid",
    "statistics",
    "reference",
];

pub(super) const GENES: &[&str] = &[
    "entry",
    "symbol",
    "name",
    "orthology",
    "organism",
    "pathway",
    "module",
    "network",
    "disease",
    "drug_target",
    "brite",
    "position",
    "motif",
    "dblinks",
    "structure",
    "aaseq",
    "ntseq",
];

pub(super) const COMPOUND: &[&str] = &[
    "entry",
    "name",
    "formula",
    "exact_mass",
    "mol_weight",
    "sequence",
    "remark",
    "comment",
    "reaction",
    "pathway",
    "module",
    "network",
    "enzyme",
    "brite",
    "reference",
    "dblinks",
    "atom",
    "bond",
    "bracket",
];

pub(super) const GLYCAN: &[&str] = &[
    "entry",
    "name",
    "composition",
    "mass",
    "class",
    "remark",
    "comment",
    "reaction",
    "pathway",
    "module",
    "enzyme",
    "orthology",
    "brite",
    "reference",
    "dblinks",
    "node",
    "edge",
    "bracket",
];

pub(super) const REACTION: &[&str] = &[
    "entry",
    "name",
    "definition",
    "equation",
    "remark",
    "comment",
    "rclass",
    "enzyme",
    "pathway",
    "module",
    "orthology",
    "brite",
    "reference",
    "dblinks",
];

pub(super) const RCLASS: &[&str] = &[
    "entry",
    "definition",
    "rpair",
    "reaction",
    "enzyme",
    "pathway",
    "orthology",
    "brite",
    "reference",
];

pub(super) const ENZYME: &[&str] = &[
    "entry",
    "name",
    "class",
    "sysname",
    "reaction",
    "all_reac",
    "substrate",
    "product",
    "comment",
    "history",
    "pathway",
    "orthology",
    "genes",
    "reference",
    "dblinks",
];

pub(super) const NETWORK: &[&str] = &[
    "entry",
    "name",
    "definition",
    "expanded",
    "type",
    "class",
    "pathway",
    "disease",
    "gene",
    "perturbant",
    "variant",
    "reference",
];

pub(super) const VARIANT: &[&str] = &[
    "entry",
    "name",
    "organism",
    "gene",
    "type",
    "variation",
    "network",
    "disease",
    "drug_target",
    "dblinks",
    "reference",
];

pub(super) const DISEASE: &[&str] = &[
    "entry",
    "name",
    "description",
    "category",
    "brite",
    "pathway",
    "network",
    "gene",
    "drug",
    "comment",
    "dblinks",
    "reference",
];

pub(super) const DRUG: &[&str] = &[
    "entry",
    "name",
    "product",
    "formula",
    "exact_mass",
    "mol_weight",
    "sequence",
    "remark",
    "efficacy",
    "disease",
    "comment",
    "target",
    "metabolism",
    "interaction",
    "str_map",
    "other_map",
    "brite",
    "reference",
    "dblinks",
    "atom",
    "bond",
    "bracket",
];

pub(super) const DGROUP: &[&str] = &[
    "entry",
    "name",
    "type",
    "member",
    "remark",
    "comment",
    "efficacy",
    "target",
    "interaction",
    "brite",
    "dblinks",
    "reference",
];
