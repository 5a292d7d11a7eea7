//! Shared fixtures for the conversion tests.

/// The canonical fixture: two node shapes exercising every recognized
/// predicate, messy-but-valid spacing, tabs and comments included.
#[allow(unused)]
pub const VALID_TTL: &str = r#"  @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix dash: <http://datashapes.org/dash#> .
@prefix   xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix sh:  <http://www.w3.org/ns/shacl#> .

@prefix ex: <http://example.org/path/>   .


ex:TestShape a sh:NodeShape;
  sh:targetClass ex:TestSchema;
	sh:ignoredProperties ( rdf:type ) ;			# the synthetic rdf:type triple must not be flagged
  sh:closed true;
  ex:unknown "unknown wrong value should be ignored";
  sh:property [
    sh:path ex:stringProp;
    sh:datatype xsd:string;
    sh:name "string property";
    sh:description "descr1. 123";
    sh:minCount 1; sh:maxCount 1;
  ] ;
  sh:property  [
    sh:maxCount  1;
    sh:datatype xsd:boolean;
    sh:path ex:boolProp;
    sh:description "descr2";
  ];
  sh:property [
    sh:path ex:objectProp;
    sh:node ex:objectPropShape;
    sh:maxCount   1;
  ];

  sh:property [
    sh:node ex:objectPropShape;
    sh:description "array descr";
    sh:path ex:objArrayProp;
    sh:minCount 1;
  ];
  sh:property [
    sh:path ex:strArrayProp;
    sh:datatype xsd:string;
    sh:maxCount 10;
    sh:description "array descr";
  ];
  sh:property [
    sh:path ex:dateProp;
    sh:datatype xsd:dateTime;
    sh:maxCount 1;
  ];
  sh:property [
    sh:path ex:numberProp;
    sh:datatype xsd:double;
    sh:maxExclusive 2;
    sh:minInclusive 3;
    sh:minExclusive 4;
    sh:maxInclusive 5;
    sh:maxCount 1;
  ];
  sh:property [
    sh:path ex:patternProp;
    sh:datatype xsd:string;
    sh:maxLength 10;
    sh:minLength 5;
    sh:pattern "[0-9]{7}";
    sh:maxCount 1;
  ];
  sh:property [
    sh:path ex:enumProp;
    sh:datatype xsd:string;
    sh:in ("e1" "e2"  "e3");
    sh:maxCount  1;
  ].

ex:objectPropShape a sh:NodeShape;
  sh:targetClass ex:objectPropSchema;
  sh:ignoredProperties ( rdf:type ) ;
  sh:property [
    sh:path ex:prop;
    sh:datatype xsd:string;
    sh:maxCount 1;
  ] .
"#;

/// A minimal closed shape with one scalar string property, parameterized
/// over the shape subject.
#[allow(unused)]
pub fn minimal_shape(subject: &str) -> String {
    format!(
        "@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
         @prefix sh: <http://www.w3.org/ns/shacl#> .\n\
         @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n\
         @prefix ex: <http://example.org/ns#> .\n\
         {subject} a sh:NodeShape ;\n\
           sh:targetClass ex:TestSchema ;\n\
           sh:ignoredProperties ( rdf:type ) ;\n\
           sh:closed true ;\n\
           sh:property [\n\
             sh:path ex:stringProp ;\n\
             sh:datatype xsd:string ;\n\
             sh:minCount 1 ;\n\
             sh:maxCount 1 ;\n\
           ] ."
    )
}
