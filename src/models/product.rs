use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ValidationError;

/// Identificador asignado por el servidor (entero o texto según backend)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// Producto canónico del cliente.
///
/// Algunos backends envían `title` en lugar de `name`; se adapta aquí, en la
/// frontera, para que nadie más tenga que mirar qué campo vino.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
}

/// Cuerpo de `POST /admin/products`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Borrador local del formulario de alta. Guarda el texto tal cual lo escribe
/// el admin; solo se convierte a `NewProduct` al enviar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image_url: String,
}

impl ProductDraft {
    pub fn is_empty(&self) -> bool {
        *self == ProductDraft::default()
    }

    /// Valida el borrador y construye el payload.
    ///
    /// El precio debe ser un número finito y no negativo. Una URL de imagen
    /// vacía se envía como `null`.
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let raw_price = self.price.trim();
        let price = raw_price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| ValidationError::InvalidPrice(self.price.clone()))?;

        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            image_url,
        })
    }
}

/// Snapshot ordenado del catálogo tal como lo devolvió el servidor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Product>);

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self(products)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn products(&self) -> &[Product] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.0.iter()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.0.iter().find(|p| &p.id == id)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self(products)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}
