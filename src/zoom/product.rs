//! Feed record construction
//!
//! Maps one raw catalog record to one marketplace feed record. Pure
//! transformation, no I/O.

use crate::store::CatalogProduct;
use crate::zoom::ean::find_ean;
use serde::Serialize;

/// Department every product is listed under on the marketplace
pub const DEPARTMENT: &str = "Informática";
/// Number of installments advertised in the feed
pub const INSTALLMENT_COUNT: u32 = 3;

const PRODUCT_URL_BASE: &str = "https://www.zunka.com.br/product/";
const IMAGE_URL_BASE: &str = "https://www.zunka.com.br/img/";

/// One product as it appears in the marketplace feed
///
/// Field order follows the Zoom schema; the serializer writes elements in
/// declaration order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename = "PRODUTO")]
pub struct FeedProduct {
    #[serde(rename = "CODIGO")]
    pub code: String,
    #[serde(rename = "NOME")]
    pub name: String,
    #[serde(rename = "DEPARTAMENTO")]
    pub department: String,
    #[serde(rename = "SUBDEPARTAMENTO")]
    pub subdepartment: String,
    #[serde(rename = "DESCRICAO")]
    pub description: String,
    #[serde(rename = "PRECO")]
    pub price: String,
    #[serde(rename = "PRECO_DE")]
    pub price_from: String,
    #[serde(rename = "NPARCELA")]
    pub installment_count: u32,
    #[serde(rename = "VPARCELA")]
    pub installment_value: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "URL_IMAGEM")]
    pub image_url: String,
    #[serde(rename = "MPC")]
    pub mpc: String,
    #[serde(rename = "EAN")]
    pub ean: String,
    #[serde(rename = "SKU")]
    pub sku: String,
}

impl FeedProduct {
    /// Derive a feed record from a catalog record
    ///
    /// The structured EAN field wins over text-mined data. PRECO_DE mirrors
    /// PRECO: the schema requires a "was" price even without a discount.
    /// MPC and SKU are not tracked by the store and stay empty.
    pub fn from_catalog(product: &CatalogProduct) -> Self {
        let code = product.id.to_hex();
        let ean = if product.ean.is_empty() {
            find_ean(&product.technical_information)
        } else {
            product.ean.clone()
        };
        let price = format_price(product.price);
        let image_url = match product.images.first() {
            Some(image) => format!("{IMAGE_URL_BASE}{code}/{image}"),
            None => String::new(),
        };

        Self {
            name: product.title.clone(),
            department: DEPARTMENT.to_string(),
            subdepartment: product.category.clone(),
            description: product.detail.clone(),
            price_from: price.clone(),
            installment_count: INSTALLMENT_COUNT,
            installment_value: format_price(truncate_cents(
                product.price / f64::from(INSTALLMENT_COUNT),
            )),
            price,
            url: format!("{PRODUCT_URL_BASE}{code}"),
            image_url,
            mpc: String::new(),
            ean,
            sku: String::new(),
            code,
        }
    }
}

/// Format a price with two decimals and the feed's comma decimal separator
pub fn format_price(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Drop everything beyond two decimal places
///
/// Truncates, never rounds: 10.00 / 3 must yield 3.33, matching every feed
/// published so far.
fn truncate_cents(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::make_test_catalog_product;

    const ID: &str = "5da9ea72ce1cd7a3b4751c32";

    #[test]
    fn derives_feed_fields_from_catalog() {
        let mut product = make_test_catalog_product(ID, "Notebook Gamer", 2499.9);
        product.images = vec!["front.jpg".to_string(), "back.jpg".to_string()];
        product.ean = "7891234567890".to_string();

        let feed = FeedProduct::from_catalog(&product);
        assert_eq!(feed.code, ID);
        assert_eq!(feed.name, "Notebook Gamer");
        assert_eq!(feed.department, DEPARTMENT);
        assert_eq!(feed.subdepartment, "Notebooks");
        assert_eq!(feed.description, "Produto em estoque.");
        assert_eq!(feed.price, "2499,90");
        assert_eq!(feed.installment_count, 3);
        assert_eq!(feed.installment_value, "833,30");
        assert_eq!(feed.url, format!("https://www.zunka.com.br/product/{ID}"));
        assert_eq!(
            feed.image_url,
            format!("https://www.zunka.com.br/img/{ID}/front.jpg")
        );
        assert_eq!(feed.ean, "7891234567890");
        assert_eq!(feed.mpc, "");
        assert_eq!(feed.sku, "");
    }

    #[test]
    fn price_from_always_mirrors_price() {
        let feed = FeedProduct::from_catalog(&make_test_catalog_product(ID, "Mouse", 149.5));
        assert_eq!(feed.price_from, feed.price);
    }

    #[test]
    fn installment_value_truncates_to_two_decimals() {
        let feed = FeedProduct::from_catalog(&make_test_catalog_product(ID, "Mouse", 10.0));
        assert_eq!(feed.installment_value, "3,33");

        let feed = FeedProduct::from_catalog(&make_test_catalog_product(ID, "Teclado", 100.0));
        assert_eq!(feed.installment_value, "33,33");

        let feed = FeedProduct::from_catalog(&make_test_catalog_product(ID, "Cabo", 5.0));
        assert_eq!(feed.installment_value, "1,66");
    }

    #[test]
    fn structured_ean_wins_over_technical_information() {
        let mut product = make_test_catalog_product(ID, "Monitor", 899.0);
        product.ean = "1111111111111".to_string();
        product.technical_information = "EAN; 2222222222222".to_string();

        let feed = FeedProduct::from_catalog(&product);
        assert_eq!(feed.ean, "1111111111111");
    }

    #[test]
    fn missing_ean_falls_back_to_technical_information() {
        let mut product = make_test_catalog_product(ID, "Monitor", 899.0);
        product.technical_information = "Tela: 24\"\nEAN; 2222222222222".to_string();

        let feed = FeedProduct::from_catalog(&product);
        assert_eq!(feed.ean, "2222222222222");
    }

    #[test]
    fn image_url_is_empty_without_images() {
        let feed = FeedProduct::from_catalog(&make_test_catalog_product(ID, "Mouse", 149.5));
        assert_eq!(feed.image_url, "");
    }

    #[test]
    fn price_uses_comma_decimal_separator() {
        assert_eq!(format_price(1234.5), "1234,50");
        assert_eq!(format_price(0.9), "0,90");
    }
}
