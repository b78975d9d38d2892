//! RDF / RDFS / OWL / XSD 語彙の IRI

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const XSD_GYEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";

/// クラス宣言として扱う rdf:type の目的語
pub const CLASS_KINDS: [&str; 2] = [RDFS_CLASS, OWL_CLASS];

/// プロパティ宣言として扱う rdf:type の目的語
pub const PROPERTY_KINDS: [&str; 4] = [
    RDF_PROPERTY,
    OWL_OBJECT_PROPERTY,
    OWL_DATATYPE_PROPERTY,
    OWL_ANNOTATION_PROPERTY,
];

/// rdf: / rdfs: / owl: 名前空間に属するか
pub fn is_schema_vocabulary(iri: &str) -> bool {
    iri.starts_with(RDF_NS) || iri.starts_with(RDFS_NS) || iri.starts_with(OWL_NS)
}

/// rdfs:range の目的語がリテラル値を意味するか (rdfs:Literal, xsd:*, rdf:langString)
pub fn is_literal_range(iri: &str) -> bool {
    iri == RDFS_LITERAL || iri == RDF_LANG_STRING || iri.starts_with(XSD_NS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_vocabulary_membership() {
        assert!(is_schema_vocabulary(RDF_TYPE));
        assert!(is_schema_vocabulary(RDFS_LITERAL));
        assert!(is_schema_vocabulary(OWL_CLASS));
        assert!(!is_schema_vocabulary(XSD_STRING));
        assert!(!is_schema_vocabulary("http://example.org/research/writes"));
    }

    #[test]
    fn test_literal_range_detection() {
        assert!(is_literal_range(RDFS_LITERAL));
        assert!(is_literal_range(XSD_GYEAR));
        assert!(is_literal_range(RDF_LANG_STRING));
        assert!(!is_literal_range(RDFS_CLASS));
        assert!(!is_literal_range("http://example.org/research/Author"));
    }
}
