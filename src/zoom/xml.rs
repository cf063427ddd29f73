//! Marketplace XML document rendering
//!
//! Renders the feed exactly as Zoom's ingestion expects it: declaration
//! header, a single `PRODUTOS` root, one `PRODUTO` child per record, with
//! every element present even when empty. Output is deterministic so the
//! publisher can compare runs byte for byte.

use crate::error::Result;
use crate::zoom::product::FeedProduct;
use quick_xml::se::Serializer;
use serde::Serialize;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Element order inside each `PRODUTO`, as mandated by the Zoom schema
pub const FEED_ELEMENT_ORDER: [&str; 14] = [
    "CODIGO",
    "NOME",
    "DEPARTAMENTO",
    "SUBDEPARTAMENTO",
    "DESCRICAO",
    "PRECO",
    "PRECO_DE",
    "NPARCELA",
    "VPARCELA",
    "URL",
    "URL_IMAGEM",
    "MPC",
    "EAN",
    "SKU",
];

/// Ordered set of feed records under the `PRODUTOS` root
#[derive(Debug, Serialize)]
#[serde(rename = "PRODUTOS")]
pub struct FeedDocument {
    #[serde(rename = "PRODUTO")]
    products: Vec<FeedProduct>,
}

impl FeedDocument {
    pub fn new(products: Vec<FeedProduct>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Render the feed document to its canonical serialized form
pub fn render(document: &FeedDocument) -> Result<String> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 4);
    document.serialize(serializer)?;

    let mut xml = String::with_capacity(XML_DECLARATION.len() + body.len());
    xml.push_str(XML_DECLARATION);
    xml.push_str(&body);
    Ok(xml)
}
