//! # Domain Types
//!
//! Entities stored by the Pastelería backend and their JSON wire format.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐         │
//! │  │    Product      │  │    Employee     │  │     Order       │         │
//! │  │  (pasteles)     │  │  (empleados)    │  │   (pedidos)     │         │
//! │  │  ─────────────  │  │  ─────────────  │  │  ─────────────  │         │
//! │  │  nombre         │  │  nombre         │  │  cliente        │         │
//! │  │  precio         │  │  rol            │  │  producto       │         │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────────────────────────────┐      │
//! │  │     User        │  │  Record<T>                              │      │
//! │  │  (usuarios)     │  │  { "_id": "<uuid>", ...fields of T }    │      │
//! │  │  ─────────────  │  └─────────────────────────────────────────┘      │
//! │  │  nombre         │                                                   │
//! │  │  email          │                                                   │
//! │  │  password(hash) │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Schema-Flexible Fields
//! Every field is optional. Missing fields are stored and returned as
//! `null`, unknown fields are dropped, and no value is range-checked
//! (a negative `precio` is accepted as-is). Scalars are coerced the way a
//! form submission expects: `"precio": "10"` stores `10`, `"nombre": 123`
//! stores `"123"` (see [`crate::coerce`]).
//!
//! An order's `producto` is free text with no link to the catalog.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::Debug;
use ts_rs::TS;

// =============================================================================
// Entity Traits
// =============================================================================

/// A document type stored in its own collection.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + Debug + Send + Sync + Unpin + 'static
{
    /// Collection (table) name, also the URL segment under `/api`.
    const COLLECTION: &'static str;
}

/// An entity exposed through the generic list/create/delete routes.
pub trait CrudEntity: Entity {
    /// Acknowledgment sent with `201 Created`.
    const CREATED_MESSAGE: &'static str;

    /// Acknowledgment sent after a delete, whether or not the id existed.
    const DELETED_MESSAGE: &'static str;
}

// =============================================================================
// Record
// =============================================================================

/// A stored document: the entity's fields plus its identifier.
///
/// ## Serialization
/// ```json
/// { "_id": "0b6c2b4e-...", "nombre": "Torta", "precio": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    /// Identifier assigned by the persistence layer at creation.
    #[serde(rename = "_id")]
    pub id: String,

    /// The entity fields, flattened next to `_id`.
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    /// Pairs an identifier with entity data.
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Record {
            id: id.into(),
            data,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A cake or other bakery product in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name.
    #[serde(rename = "nombre", default, deserialize_with = "crate::coerce::text")]
    pub name: Option<String>,

    /// Price, any number (no currency or sign rules), kept as sent.
    #[serde(rename = "precio", default, deserialize_with = "crate::coerce::number")]
    #[ts(type = "number | null")]
    pub price: Option<Number>,
}

impl Entity for Product {
    const COLLECTION: &'static str = "pasteles";
}

impl CrudEntity for Product {
    const CREATED_MESSAGE: &'static str = "Pastel creado";
    const DELETED_MESSAGE: &'static str = "Pastel eliminado";
}

// =============================================================================
// Employee
// =============================================================================

/// A member of staff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Employee {
    #[serde(rename = "nombre", default, deserialize_with = "crate::coerce::text")]
    pub name: Option<String>,

    #[serde(rename = "rol", default, deserialize_with = "crate::coerce::text")]
    pub role: Option<String>,
}

impl Entity for Employee {
    const COLLECTION: &'static str = "empleados";
}

impl CrudEntity for Employee {
    const CREATED_MESSAGE: &'static str = "Empleado creado";
    const DELETED_MESSAGE: &'static str = "Empleado eliminado";
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Customer name.
    #[serde(rename = "cliente", default, deserialize_with = "crate::coerce::text")]
    pub customer: Option<String>,

    /// Product name, not validated against the catalog.
    #[serde(rename = "producto", default, deserialize_with = "crate::coerce::text")]
    pub product: Option<String>,
}

impl Entity for Order {
    const COLLECTION: &'static str = "pedidos";
}

impl CrudEntity for Order {
    const CREATED_MESSAGE: &'static str = "Pedido registrado";
    const DELETED_MESSAGE: &'static str = "Pedido eliminado";
}

// =============================================================================
// User
// =============================================================================

/// A registered user as stored in the `usuarios` collection.
///
/// Never serialized into an HTTP response: `password` holds the argon2
/// PHC string, and there is no route that lists users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name used in the login greeting.
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    /// Login email. Not unique.
    pub email: Option<String>,

    /// Salted password hash.
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl User {
    /// Greeting returned by a successful login.
    ///
    /// ## Example
    /// ```rust
    /// use pasteleria_core::User;
    ///
    /// let user = User {
    ///     name: Some("Ana".to_string()),
    ///     email: Some("a@x.com".to_string()),
    ///     password_hash: String::new(),
    /// };
    /// assert_eq!(user.greeting(), "Bienvenido Ana");
    /// ```
    pub fn greeting(&self) -> String {
        format!("Bienvenido {}", self.name.as_deref().unwrap_or_default())
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "usuarios";
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Body of `POST /registro`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Registration {
    #[serde(rename = "nombre", default, deserialize_with = "crate::coerce::text")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "crate::coerce::text")]
    pub email: Option<String>,

    /// Plaintext password; hashed before anything is stored.
    #[serde(default, deserialize_with = "crate::coerce::text")]
    pub password: Option<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Credentials {
    #[serde(default, deserialize_with = "crate::coerce::text")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "crate::coerce::text")]
    pub password: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_wire_names() {
        let product: Product = serde_json::from_value(json!({
            "nombre": "Torta",
            "precio": 10
        }))
        .unwrap();

        assert_eq!(product.name.as_deref(), Some("Torta"));
        assert_eq!(product.price, Some(Number::from(10)));
        assert_eq!(
            serde_json::to_string(&product).unwrap(),
            r#"{"nombre":"Torta","precio":10}"#
        );
    }

    #[test]
    fn test_missing_fields_become_null_and_unknown_are_dropped() {
        let employee: Employee = serde_json::from_value(json!({
            "nombre": "Luis",
            "turno": "noche"
        }))
        .unwrap();

        assert_eq!(employee.role, None);
        assert_eq!(
            serde_json::to_value(&employee).unwrap(),
            json!({ "nombre": "Luis", "rol": null })
        );
    }

    #[test]
    fn test_negative_price_accepted() {
        let product: Product = serde_json::from_value(json!({ "precio": -5.5 })).unwrap();
        assert_eq!(product.price, Number::from_f64(-5.5));
    }

    #[test]
    fn test_form_values_are_coerced() {
        let product: Product = serde_json::from_value(json!({
            "nombre": 123,
            "precio": "10"
        }))
        .unwrap();
        assert_eq!(product.name.as_deref(), Some("123"));
        assert_eq!(product.price, Some(Number::from(10)));

        let result: Result<Product, _> = serde_json::from_value(json!({ "precio": "diez" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_record_flattens_id_next_to_fields() {
        let record = Record::new(
            "abc",
            Order {
                customer: Some("Marta".to_string()),
                product: Some("Torta".to_string()),
            },
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({ "_id": "abc", "cliente": "Marta", "producto": "Torta" })
        );

        let back: Record<Order> = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_collection_names_and_messages() {
        assert_eq!(Product::COLLECTION, "pasteles");
        assert_eq!(Employee::COLLECTION, "empleados");
        assert_eq!(Order::COLLECTION, "pedidos");
        assert_eq!(User::COLLECTION, "usuarios");

        assert_eq!(Product::CREATED_MESSAGE, "Pastel creado");
        assert_eq!(Order::CREATED_MESSAGE, "Pedido registrado");
        assert_eq!(Employee::DELETED_MESSAGE, "Empleado eliminado");
    }

    #[test]
    fn test_user_stores_hash_under_password_key() {
        let user = User {
            name: Some("Ana".to_string()),
            email: Some("a@x.com".to_string()),
            password_hash: "$argon2id$...".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["password"], "$argon2id$...");
        assert_eq!(value["nombre"], "Ana");
    }

    #[test]
    fn test_greeting_without_name() {
        let user = User {
            name: None,
            email: None,
            password_hash: String::new(),
        };
        assert_eq!(user.greeting(), "Bienvenido ");
    }

    #[test]
    fn test_registration_body() {
        let body: Registration = serde_json::from_value(json!({
            "nombre": "Ana",
            "email": "a@x.com",
            "password": "secret"
        }))
        .unwrap();

        assert_eq!(body.name.as_deref(), Some("Ana"));
        assert_eq!(body.password.as_deref(), Some("secret"));
    }
}
