//! Static classification tables.
//!
//! Every table is ordered; classifiers walk them first-match-wins unless
//! noted otherwise.

use pharmaprofile_shared::KeywordRule;

// ---------------------------------------------------------------------------
// Drug type
// ---------------------------------------------------------------------------

pub const NOVEL_AGENT: &str = "Novel Agent";

pub const DRUG_TYPE_RULES: &[KeywordRule] = &[
    KeywordRule::any(
        "Serotonin-Dopamine Activity Modulators (SDAMs)",
        &["serotonin-dopamine"],
    ),
    KeywordRule::all("Partial Agonist-Antagonist", &["partial agonist", "antagonist"]),
    KeywordRule::any("Serotonergic Agent", &["serotonin", "5-ht"]),
    KeywordRule::any("Dopaminergic Agent", &["dopamine", "d2"]),
    KeywordRule::any("Cholinergic Agent", &["cholinergic", "acetylcholine"]),
    KeywordRule::any("GABAergic Agent", &["gaba"]),
    KeywordRule::any("Histaminergic Agent", &["histamine", "h1"]),
    KeywordRule::any("Adrenergic Agent", &["adrenergic", "norepinephrine"]),
    KeywordRule::all("Reuptake Inhibitor", &["inhibit", "reuptake"]),
];

// ---------------------------------------------------------------------------
// Receptor targets
// ---------------------------------------------------------------------------

/// One receptor: canonical id, endogenous ligand, receptor-family adjective.
/// All three act as search terms.
#[derive(Debug, Clone, Copy)]
pub struct ReceptorEntry {
    pub receptor: &'static str,
    pub ligand: &'static str,
    pub family_label: &'static str,
}

impl ReceptorEntry {
    const fn new(receptor: &'static str, ligand: &'static str, family_label: &'static str) -> Self {
        Self {
            receptor,
            ligand,
            family_label,
        }
    }

    pub fn terms(&self) -> [&'static str; 3] {
        [self.receptor, self.ligand, self.family_label]
    }
}

/// Every entry whose terms occur is reported, in table order.
pub const RECEPTORS: &[ReceptorEntry] = &[
    ReceptorEntry::new("D2", "dopamine", "dopaminergic"),
    ReceptorEntry::new("D1", "dopamine", "dopaminergic"),
    ReceptorEntry::new("D3", "dopamine", "dopaminergic"),
    ReceptorEntry::new("5-HT1A", "serotonin", "serotonergic"),
    ReceptorEntry::new("5-HT2A", "serotonin", "serotonergic"),
    ReceptorEntry::new("5-HT2C", "serotonin", "serotonergic"),
    ReceptorEntry::new("5-HT7", "serotonin", "serotonergic"),
    ReceptorEntry::new("α1", "adrenergic", "noradrenergic"),
    ReceptorEntry::new("α2", "adrenergic", "noradrenergic"),
    ReceptorEntry::new("β1", "adrenergic", "noradrenergic"),
    ReceptorEntry::new("H1", "histamine", "histaminergic"),
    ReceptorEntry::new("M1", "muscarinic", "cholinergic"),
    ReceptorEntry::new("GABA", "GABA", "GABAergic"),
    ReceptorEntry::new("NMDA", "glutamate", "glutamatergic"),
    ReceptorEntry::new("NK1", "neurokinin", "neurokininergic"),
    ReceptorEntry::new("μ-opioid", "opioid", "opioidergic"),
    ReceptorEntry::new("κ-opioid", "opioid", "opioidergic"),
    ReceptorEntry::new("δ-opioid", "opioid", "opioidergic"),
];

/// Scanned over the whole mechanism text, not near the receptor mention.
pub const ACTIVITY_TYPES: &[&str] = &[
    "agonist",
    "antagonist",
    "partial agonist",
    "inverse agonist",
    "modulator",
    "inhibitor",
];

pub const UNKNOWN_ACTIVITY: &str = "Unknown";

/// Transporters inferred when only "reuptake inhibitor" is mentioned.
pub struct TransporterEntry {
    pub receptor: &'static str,
    pub family: &'static str,
    pub terms: &'static [&'static str],
}

pub const TRANSPORTERS: &[TransporterEntry] = &[
    TransporterEntry {
        receptor: "SERT",
        family: "Serotonin Transporters",
        terms: &["serotonin", "5-ht"],
    },
    TransporterEntry {
        receptor: "DAT",
        family: "Dopamine Transporters",
        terms: &["dopamine"],
    },
    TransporterEntry {
        receptor: "NET",
        family: "Norepinephrine Transporters",
        terms: &["norepinephrine", "noradrenaline"],
    },
];

// ---------------------------------------------------------------------------
// Therapeutic areas
// ---------------------------------------------------------------------------

pub const OTHER_CONDITIONS: &str = "Other Conditions";

pub const THERAPEUTIC_RULES: &[KeywordRule] = &[
    KeywordRule::any(
        "Psychiatric Disorders",
        &[
            "depression", "schizophrenia", "bipolar", "anxiety", "ocd", "adhd", "insomnia",
            "psychiatric", "mental", "psychosis", "psychotic", "mood",
        ],
    ),
    KeywordRule::any(
        "Neurological Disorders",
        &[
            "alzheimer", "parkinson", "huntington", "dementia", "epilepsy", "seizure",
            "multiple sclerosis", "migraine", "headache", "stroke", "cerebral", "brain", "neural",
            "neuron", "neuropathic", "neurological",
        ],
    ),
    KeywordRule::any(
        "Cardiovascular Disorders",
        &[
            "heart", "cardiac", "cardio", "hypertension", "blood pressure", "arrhythmia", "stroke",
            "cholesterol", "lipid", "angina", "myocardial", "thrombosis", "embolism", "vascular",
        ],
    ),
    KeywordRule::any(
        "Respiratory Disorders",
        &[
            "asthma", "copd", "bronchitis", "pneumonia", "respiratory", "pulmonary", "lung",
            "breath", "breathing", "airway", "bronchial",
        ],
    ),
    KeywordRule::any(
        "Infectious Diseases",
        &[
            "infection", "bacterial", "viral", "fungal", "pathogen", "antibiotic", "antimicrobial",
            "antiviral", "antifungal", "hiv", "aids", "herpes", "hepatitis",
        ],
    ),
    KeywordRule::any(
        "Metabolic Disorders",
        &[
            "diabetes", "thyroid", "metabolism", "metabolic", "obesity", "weight", "glycemic",
            "hyperglycemia", "hyperlipidemia", "insulin", "gout",
        ],
    ),
    KeywordRule::any(
        "Oncology",
        &[
            "cancer", "tumor", "carcinoma", "sarcoma", "lymphoma", "leukemia", "melanoma",
            "oncology", "malignant", "neoplasm",
        ],
    ),
    KeywordRule::any(
        "Immune Disorders",
        &[
            "immune", "autoimmune", "allergy", "allergic", "arthritis", "rheumatoid", "psoriasis",
            "inflammation", "inflammatory", "transplant",
        ],
    ),
];

// ---------------------------------------------------------------------------
// Chemical classes
// ---------------------------------------------------------------------------

/// A named chemical family and its member compounds.
pub struct ChemicalFamily {
    pub key: &'static str,
    pub structure_type: &'static str,
    pub chemical_class: &'static str,
    pub members: &'static [&'static str],
}

pub const CHEMICAL_FAMILIES: &[ChemicalFamily] = &[
    ChemicalFamily {
        key: "phenothiazine",
        structure_type: "Phenothiazine",
        chemical_class: "Tricyclic Compounds",
        members: &["chlorpromazine", "fluphenazine", "prochlorperazine"],
    },
    ChemicalFamily {
        key: "butyrophenone",
        structure_type: "Butyrophenone",
        chemical_class: "Halogenated Compounds",
        members: &["haloperidol", "droperidol"],
    },
    ChemicalFamily {
        key: "thioxanthene",
        structure_type: "Thioxanthene",
        chemical_class: "Tricyclic Compounds",
        members: &["thiothixene", "flupenthixol"],
    },
    ChemicalFamily {
        key: "benzisoxazole",
        structure_type: "Benzisoxazole",
        chemical_class: "Heterocyclic Compounds",
        members: &["risperidone", "paliperidone", "iloperidone"],
    },
    ChemicalFamily {
        key: "quinolone",
        structure_type: "Quinolinone Derivative",
        chemical_class: "Heterocyclic Compounds",
        members: &["aripiprazole", "brexpiprazole", "cariprazine"],
    },
    ChemicalFamily {
        key: "ssri",
        structure_type: "Various",
        chemical_class: "Selective Serotonin Reuptake Inhibitors",
        members: &["fluoxetine", "sertraline", "paroxetine", "escitalopram", "citalopram"],
    },
    ChemicalFamily {
        key: "snri",
        structure_type: "Various",
        chemical_class: "Serotonin-Norepinephrine Reuptake Inhibitors",
        members: &["venlafaxine", "duloxetine", "desvenlafaxine", "levomilnacipran"],
    },
    ChemicalFamily {
        key: "tricyclic",
        structure_type: "Tricyclic",
        chemical_class: "Tricyclic Antidepressants",
        members: &["amitriptyline", "imipramine", "desipramine", "nortriptyline"],
    },
    ChemicalFamily {
        key: "maoi",
        structure_type: "Various",
        chemical_class: "Monoamine Oxidase Inhibitors",
        members: &["phenelzine", "tranylcypromine", "selegiline", "moclobemide"],
    },
    ChemicalFamily {
        key: "benzodiazepine",
        structure_type: "Benzodiazepine",
        chemical_class: "GABA Receptor Modulators",
        members: &["diazepam", "alprazolam", "clonazepam", "lorazepam"],
    },
    ChemicalFamily {
        key: "azapirone",
        structure_type: "Azapirone",
        chemical_class: "Serotonin 5-HT1A Receptor Agonists",
        members: &["buspirone"],
    },
    ChemicalFamily {
        key: "phenylethylamine",
        structure_type: "Phenylethylamine",
        chemical_class: "Amphetamine Derivatives",
        members: &["amphetamine", "methylphenidate", "bupropion"],
    },
];

/// Name-specific classification that beats the generic families.
pub struct NameOverride {
    pub name: &'static str,
    pub structure_type: &'static str,
    pub chemical_class: &'static str,
    /// `(compound, relation_type)`
    pub related: &'static [(&'static str, &'static str)],
}

pub const NAME_OVERRIDES: &[NameOverride] = &[NameOverride {
    name: "brexpiprazole",
    structure_type: "Quinolinone Derivative",
    chemical_class: "Benzothiophene-Containing Compounds",
    related: &[
        ("aripiprazole", "structural analog"),
        ("cariprazine", "functional analog"),
    ],
}];

/// Name fragments shared by a drug class, e.g. `-statin`.
pub const SUFFIX_FAMILIES: &[(&str, &[&str])] = &[
    (
        "statin",
        &[
            "atorvastatin", "simvastatin", "rosuvastatin", "pravastatin", "lovastatin",
            "fluvastatin", "pitavastatin",
        ],
    ),
    (
        "pril",
        &[
            "enalapril", "lisinopril", "ramipril", "captopril", "benazepril", "perindopril",
            "quinapril",
        ],
    ),
    (
        "sartan",
        &["losartan", "valsartan", "candesartan", "irbesartan", "telmisartan", "olmesartan"],
    ),
    (
        "olol",
        &[
            "metoprolol", "atenolol", "propranolol", "bisoprolol", "carvedilol", "nebivolol",
            "timolol",
        ],
    ),
    (
        "dipine",
        &["amlodipine", "nifedipine", "felodipine", "nicardipine", "clevidipine", "nimodipine"],
    ),
    (
        "floxacin",
        &[
            "ciprofloxacin", "levofloxacin", "moxifloxacin", "ofloxacin", "gemifloxacin",
            "norfloxacin",
        ],
    ),
    (
        "cillin",
        &["amoxicillin", "ampicillin", "penicillin", "nafcillin", "oxacillin", "dicloxacillin"],
    ),
    (
        "mycin",
        &[
            "erythromycin", "azithromycin", "clarithromycin", "clindamycin", "vancomycin",
            "gentamicin",
        ],
    ),
    (
        "cef",
        &["cefazolin", "ceftriaxone", "cefepime", "cefuroxime", "ceftaroline", "cefdinir"],
    ),
    (
        "setron",
        &["ondansetron", "granisetron", "palonosetron", "dolasetron", "tropisetron"],
    ),
    ("tidine", &["ranitidine", "famotidine", "cimetidine", "nizatidine"]),
    (
        "prazole",
        &["omeprazole", "esomeprazole", "lansoprazole", "pantoprazole", "rabeprazole"],
    ),
    ("lukast", &["montelukast", "zafirlukast", "zileuton"]),
];

/// Generic analogs chosen by name fragment or by therapeutic area.
pub struct AnalogRule {
    pub name_terms: &'static [&'static str],
    pub area: Option<&'static str>,
    pub analogs: &'static [&'static str],
}

pub const ANALOG_RULES: &[AnalogRule] = &[
    AnalogRule {
        name_terms: &["anti", "anti-", "antibacterial", "antibiotic"],
        area: Some("Infectious Diseases"),
        analogs: &["amoxicillin", "azithromycin"],
    },
    AnalogRule {
        name_terms: &["hypertens", "blood pressure", "cardio", "heart"],
        area: Some("Cardiovascular Disorders"),
        analogs: &["lisinopril", "amlodipine"],
    },
    AnalogRule {
        name_terms: &["psych", "schizo", "antipsychotic"],
        area: Some("Psychiatric Disorders"),
        analogs: &["risperidone", "olanzapine"],
    },
    AnalogRule {
        name_terms: &["depress", "antidepressant"],
        area: None,
        analogs: &["sertraline", "escitalopram"],
    },
    AnalogRule {
        name_terms: &["diabet", "glucose", "insulin"],
        area: Some("Metabolic Disorders"),
        analogs: &["metformin", "glipizide"],
    },
    AnalogRule {
        name_terms: &["pain", "analgesic"],
        area: None,
        analogs: &["ibuprofen", "acetaminophen"],
    },
    AnalogRule {
        name_terms: &["allerg", "antihist"],
        area: Some("Immune Disorders"),
        analogs: &["loratadine", "cetirizine"],
    },
];

pub const PLACEHOLDER_ANALOGS: &[&str] = &["related compound 1", "related compound 2"];

pub const MAX_RELATED_COMPOUNDS: usize = 3;

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

/// Mechanism keyword to receptor, every match emits a `has_target` triple.
pub const TARGET_TERMS: &[(&str, &str)] = &[
    ("dopamine", "Dopamine D2 Receptor"),
    ("d2", "Dopamine D2 Receptor"),
    ("serotonin", "Serotonin Receptor"),
    ("5-ht1a", "Serotonin 5-HT1A Receptor"),
    ("5-ht2a", "Serotonin 5-HT2A Receptor"),
    ("adrenergic", "Adrenergic Receptor"),
    ("alpha1", "Alpha-1 Adrenergic Receptor"),
    ("alpha2", "Alpha-2 Adrenergic Receptor"),
    ("histamine", "Histamine Receptor"),
    ("h1", "Histamine H1 Receptor"),
    ("muscarinic", "Muscarinic Receptor"),
    ("gaba", "GABA Receptor"),
    ("nmda", "NMDA Glutamate Receptor"),
    ("opioid", "Opioid Receptor"),
];

/// Evaluated independently; partial agonism excludes plain agonism.
pub const MECHANISM_RULES: &[KeywordRule] = &[
    KeywordRule::any("Partial Agonism", &["partial agonist"]),
    KeywordRule::any("Antagonism", &["antagonist"]),
    KeywordRule::any("Agonism", &["agonist"]).excluding(&["partial agonist"]),
    KeywordRule::all("Reuptake Inhibition", &["inhibit", "reuptake"]),
];

pub const ADVERSE_EFFECTS: &[&str] = &[
    "akathisia",
    "weight gain",
    "sedation",
    "insomnia",
    "headache",
    "nausea",
    "dizziness",
    "constipation",
    "diarrhea",
    "fatigue",
    "rash",
    "hypotension",
];

// ---------------------------------------------------------------------------
// Semantic network
// ---------------------------------------------------------------------------

/// `acts_on` branches, in priority order.
pub const NETWORK_TARGETS: &[KeywordRule] = &[
    KeywordRule::any("Dopamine D2 Receptor", &["d2", "dopamine"]),
    KeywordRule::any("Serotonin 5-HT1A Receptor", &["5-ht1a", "serotonin"]),
    KeywordRule::any("Serotonin 5-HT2A Receptor", &["5-ht2a"]),
];

pub const MAX_NETWORK_TARGETS: usize = 3;
pub const MAX_NETWORK_INDICATIONS: usize = 3;
