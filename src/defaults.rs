//! Built-in default template.
//!
//! Used whenever no template file is supplied (or the supplied path does
//! not exist). Initialized lazily once and shared read-only across the
//! process; render calls never mutate it.
//!
//! Machine-generated prose slots carry generation ids so that editors
//! can toggle individual generation work, and hiding a section stops its
//! generation too.

use std::sync::LazyLock;

use crate::schema::{NodeKind, TemplateDefinition, TemplateNode};

static DEFAULT_TEMPLATE: LazyLock<TemplateDefinition> = LazyLock::new(build_default);

/// The built-in default template constant.
pub fn default_template() -> &'static TemplateDefinition {
    &DEFAULT_TEMPLATE
}

fn build_default() -> TemplateDefinition {
    TemplateDefinition::new(
        "Product API page",
        vec![
            TemplateNode::group("hero", "Hero", &["hero"]).with_children(vec![
                TemplateNode::field("hero-title", "Title", &["title"]),
                TemplateNode::field("hero-summary", "Summary sentence", &["summarySentence"])
                    .generated("summarySentence"),
                TemplateNode::list("hero-tags", "Tags", &["tags"], 6),
                TemplateNode::list("hero-use-cases", "Primary use cases", &["primaryUseCases"], 6),
            ]),
            TemplateNode::group("overview", "Overview", &["overview"]).with_children(vec![
                TemplateNode::field("overview-summary", "Key takeaway", &["summary"])
                    .generated("overviewSummary"),
                TemplateNode::field("overview-description", "Description", &["description"])
                    .generated("overviewDescription"),
            ]),
            TemplateNode::group("identification", "Identification", &["identification"])
                .with_children(vec![
                    TemplateNode::field("identification-generic", "Generic name", &["genericName"]),
                    TemplateNode::list("identification-brands", "Brand names", &["brandNames"], 12),
                    TemplateNode::list("identification-synonyms", "Synonyms", &["synonyms"], 12),
                    TemplateNode::field(
                        "identification-molecule-type",
                        "Molecule type",
                        &["moleculeType"],
                    ),
                    TemplateNode::list("identification-groups", "Groups", &["groups"], 8),
                    TemplateNode::group(
                        "identification-identifiers",
                        "Identifiers",
                        &["identifiers"],
                    )
                    .with_children(vec![
                        TemplateNode::field("identifiers-cas", "CAS", &["casNumber"]),
                        TemplateNode::field("identifiers-unii", "UNII", &["unii"]),
                        TemplateNode::field("identifiers-registry", "Registry ID", &["registryId"]),
                        TemplateNode::list("identifiers-external", "External", &["external"], 12),
                    ]),
                ]),
            TemplateNode::group("chemistry", "Chemistry", &["chemistry"]).with_children(vec![
                TemplateNode::field("chemistry-formula", "Formula", &["formula"]),
                TemplateNode::field(
                    "chemistry-average-mw",
                    "Average molecular weight",
                    &["averageMolecularWeight"],
                ),
                TemplateNode::field(
                    "chemistry-mono-mass",
                    "Monoisotopic mass",
                    &["monoisotopicMass"],
                ),
                TemplateNode::field("chemistry-logp", "logP", &["logP"]),
                TemplateNode::list(
                    "chemistry-properties",
                    "Experimental properties",
                    &["experimentalProperties"],
                    20,
                )
                .with_children(vec![
                    TemplateNode::field("chemistry-property-name", "Name", &["name"]),
                    TemplateNode::field("chemistry-property-value", "Value", &["value"]),
                ]),
            ]),
            TemplateNode::group("regulatory", "Regulatory and market", &["regulatoryAndMarket"])
                .with_children(vec![
                    TemplateNode::field("regulatory-status", "Approval status", &["approvalStatus"]),
                    TemplateNode::list("regulatory-markets", "Markets", &["markets"], 20),
                    TemplateNode::list("regulatory-patents", "Patents", &["patents"], 20)
                        .with_children(vec![
                            TemplateNode::field("patent-number", "Number", &["number"]),
                            TemplateNode::field("patent-country", "Country", &["country"]),
                            TemplateNode::field("patent-approved", "Approved", &["approvedDate"]),
                            TemplateNode::field("patent-expires", "Expires", &["expiresDate"]),
                            TemplateNode::field(
                                "patent-pediatric",
                                "Pediatric extension",
                                &["pediatricExtension"],
                            ),
                        ]),
                    TemplateNode::field(
                        "regulatory-lifecycle",
                        "Lifecycle summary",
                        &["lifecycleSummary"],
                    )
                    .generated("lifecycleSummary"),
                    TemplateNode::list(
                        "regulatory-label-highlights",
                        "Label highlights",
                        &["labelHighlights"],
                        6,
                    )
                    .generated("labelHighlights"),
                ]),
            TemplateNode::group("formulation-notes", "Formulation notes", &["formulationNotes"])
                .with_children(vec![TemplateNode::list(
                    "formulation-bullets",
                    "Bullets",
                    &["bullets"],
                    6,
                )
                .generated("formulationNotes")]),
            TemplateNode::group("taxonomy", "Categories and taxonomy", &["categoriesAndTaxonomy"])
                .with_children(vec![
                    TemplateNode::list(
                        "taxonomy-classes",
                        "Therapeutic classes",
                        &["therapeuticClasses"],
                        12,
                    ),
                    TemplateNode::list("taxonomy-atc", "ATC codes", &["atcCodes"], 20)
                        .with_children(vec![
                            TemplateNode::field("atc-code", "Code", &["code"]),
                            TemplateNode::list("atc-levels", "Levels", &["levels"], 10),
                        ]),
                    TemplateNode::field(
                        "taxonomy-classification",
                        "Classification",
                        &["classification"],
                    ),
                ]),
            TemplateNode::group("pharmacology", "Pharmacology", &["pharmacology"]).with_children(
                vec![
                    TemplateNode::field(
                        "pharmacology-moa",
                        "Mechanism of action",
                        &["mechanismOfAction"],
                    ),
                    TemplateNode::field(
                        "pharmacology-dynamics",
                        "Pharmacodynamics",
                        &["pharmacodynamics"],
                    ),
                    TemplateNode::list("pharmacology-targets", "Targets", &["targets"], 20)
                        .with_children(vec![
                            TemplateNode::field("target-name", "Name", &["name"]),
                            TemplateNode::field("target-organism", "Organism", &["organism"]),
                            TemplateNode::list("target-actions", "Actions", &["actions"], 8),
                            TemplateNode::list(
                                "target-go-processes",
                                "GO processes",
                                &["goProcesses"],
                                8,
                            ),
                        ]),
                    TemplateNode::field(
                        "pharmacology-summary",
                        "High level summary",
                        &["highLevelSummary"],
                    )
                    .generated("pharmacologySummary"),
                ],
            ),
            TemplateNode::group("adme-pk", "ADME/PK", &["admePk"]).with_children(vec![
                TemplateNode::field("adme-absorption", "Absorption", &["absorption"]),
                TemplateNode::field("adme-half-life", "Half-life", &["halfLife"]),
                TemplateNode::field("adme-binding", "Protein binding", &["proteinBinding"]),
                TemplateNode::field("adme-metabolism", "Metabolism", &["metabolism"]),
                TemplateNode::field(
                    "adme-elimination",
                    "Route of elimination",
                    &["routeOfElimination"],
                ),
                TemplateNode::field(
                    "adme-volume",
                    "Volume of distribution",
                    &["volumeOfDistribution"],
                ),
                TemplateNode::field("adme-clearance", "Clearance", &["clearance"]),
                TemplateNode::group("adme-pk-snapshot", "PK snapshot", &["pkSnapshot"])
                    .with_children(vec![TemplateNode::list(
                        "adme-pk-bullets",
                        "Key points",
                        &["keyPoints"],
                        6,
                    )
                    .generated("pkSnapshot")]),
            ]),
            TemplateNode::group(
                "products",
                "Products and dosage forms",
                &["productsAndDosageForms"],
            )
            .with_children(vec![
                TemplateNode::list("products-dosage", "Dosage forms", &["dosageForms"], 25)
                    .with_children(vec![
                        TemplateNode::field("dosage-form", "Form", &["form"]),
                        TemplateNode::field("dosage-route", "Route", &["route"]),
                        TemplateNode::field("dosage-strength", "Strength", &["strength"]),
                    ]),
                TemplateNode::field("products-by-market", "Brands by market", &["brandsByMarket"]),
                TemplateNode::field(
                    "products-market-summary",
                    "Market presence summary",
                    &["marketPresenceSummary"],
                )
                .generated("marketPresenceSummary"),
            ]),
            TemplateNode::group("clinical", "Clinical trials", &["clinicalTrials"]).with_children(
                vec![
                    TemplateNode::field("clinical-by-phase", "Trials by phase", &["trialsByPhase"]),
                    TemplateNode::field(
                        "clinical-has-data",
                        "Has data",
                        &["hasClinicalTrialsData"],
                    ),
                ],
            ),
            TemplateNode::group(
                "supply",
                "Suppliers and manufacturing",
                &["suppliersAndManufacturing"],
            )
            .with_children(vec![
                TemplateNode::list("supply-manufacturers", "Manufacturers", &["manufacturers"], 20),
                TemplateNode::list("supply-packagers", "Packagers", &["packagers"], 20),
                TemplateNode::field(
                    "supply-notes",
                    "External manufacturing notes",
                    &["externalManufacturingNotes"],
                )
                .generated("manufacturingNotes"),
                TemplateNode::list("supply-partners", "Listed suppliers", &["listedSuppliers"], 20),
                TemplateNode::field(
                    "supply-summary",
                    "Supply chain summary",
                    &["supplyChainSummary"],
                )
                .generated("supplyChainSummary"),
            ]),
            TemplateNode::group("safety", "Safety", &["safety"]).with_children(vec![
                TemplateNode::field("safety-toxicity", "Toxicity", &["toxicity"]),
                TemplateNode::list(
                    "safety-warnings",
                    "High level warnings",
                    &["highLevelWarnings"],
                    6,
                )
                .generated("safetyWarnings"),
            ]),
            TemplateNode::group(
                "experimental",
                "Experimental properties",
                &["experimentalProperties"],
            )
            .with_children(vec![TemplateNode::list(
                "experimental-list",
                "Properties",
                &["properties"],
                25,
            )]),
            TemplateNode::group("references", "References", &["references"]).with_children(vec![
                TemplateNode::list(
                    "references-articles",
                    "Scientific articles",
                    &["scientificArticles"],
                    20,
                ),
                TemplateNode::list(
                    "references-regulatory",
                    "Regulatory links",
                    &["regulatoryLinks"],
                    20,
                ),
                TemplateNode::list("references-other", "Other links", &["otherLinks"], 20),
            ]),
            TemplateNode::group("seo", "SEO", &["seo"]).with_children(vec![
                TemplateNode::field("seo-title", "Title", &["title"]).generated("seoTitle"),
                TemplateNode::field("seo-meta", "Meta description", &["metaDescription"])
                    .generated("seoMetaDescription"),
                TemplateNode::list("seo-keywords", "Keywords", &["keywords"], 25),
            ]),
            TemplateNode::group("buyer-cheatsheet", "Buyer cheatsheet", &["buyerCheatsheet"])
                .with_children(vec![TemplateNode::list(
                    "buyer-bullets",
                    "Bullets",
                    &["bullets"],
                    6,
                )
                .generated("buyerCheatsheet")]),
            TemplateNode::group("metadata", "Metadata", &["metadata"]).with_children(vec![
                TemplateNode::field("metadata-registry", "Registry ID", &["registryId"]),
                TemplateNode::field("metadata-cas", "CAS number", &["casNumber"]),
                TemplateNode::field("metadata-unii", "UNII", &["unii"]),
                TemplateNode::field("metadata-created", "Created at", &["createdAt"]),
                TemplateNode::field("metadata-updated", "Updated at", &["updatedAt"]),
                TemplateNode::list("metadata-sources", "Source systems", &["sourceSystems"], 10),
            ]),
            TemplateNode::new("interface", "Interface snapshot", NodeKind::Snapshot)
                .at(&["interface"])
                .from_snapshot()
                .hidden(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_ids<'a>(node: &'a TemplateNode, ids: &mut Vec<&'a str>) {
        ids.push(node.id.as_str());
        for child in &node.children {
            collect_ids(child, ids);
        }
    }

    #[test]
    fn default_ids_are_unique() {
        let mut ids = Vec::new();
        for block in &default_template().blocks {
            collect_ids(block, &mut ids);
        }
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn default_declares_generation_controls() {
        let template = default_template();
        assert!(template.has_generation_controls());

        let flags = template.generation_flags();
        assert_eq!(flags.get("overviewSummary"), Some(&true));
        assert_eq!(flags.get("supplyChainSummary"), Some(&true));
    }

    #[test]
    fn default_round_trips() {
        let template = default_template();
        let json = serde_json::to_string(template).unwrap();
        let parsed: TemplateDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, template);
    }

    #[test]
    fn interface_block_is_hidden_snapshot() {
        let block = default_template()
            .blocks
            .iter()
            .find(|b| b.id == "interface")
            .unwrap();
        assert!(!block.visible);
        assert_eq!(block.kind, NodeKind::Snapshot);
    }
}
