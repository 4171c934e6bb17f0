use crate::{CategoryId, ContactId, OrderId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nested contact reference carried inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContact {
    #[serde(default)]
    pub nome: Option<String>,
}

/// A sales order as the ERP reports it.
///
/// The ERP is the system of record; this is a read-only, possibly stale
/// copy. Everything except the id is optional on the wire — older payloads
/// use `data`/`status`/`valor`/`cliente` where newer ones use
/// `dataEmissao`/`situacao`/`total`/`contato`, and the accessors below
/// resolve the fallbacks in one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub numero: Option<i64>,
    #[serde(default, rename = "dataEmissao")]
    pub data_emissao: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub contato: Option<OrderContact>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub valor: Option<Decimal>,
}

impl Order {
    /// The number shown to operators, falling back to the ERP id.
    pub fn display_number(&self) -> i64 {
        self.numero.unwrap_or(self.id.0)
    }

    /// Emission date as the ERP sent it (`YYYY-MM-DD`), if any.
    pub fn emission_date(&self) -> Option<&str> {
        self.data_emissao.as_deref().or(self.data.as_deref())
    }

    pub fn customer_name(&self) -> &str {
        self.contato
            .as_ref()
            .and_then(|c| c.nome.as_deref())
            .or(self.cliente.as_deref())
            .unwrap_or("Cliente não informado")
    }

    /// Free-text status label from the ERP.
    pub fn status_label(&self) -> &str {
        self.situacao
            .as_deref()
            .or(self.status.as_deref())
            .unwrap_or("Indefinido")
    }

    pub fn status_kind(&self) -> OrderStatusKind {
        OrderStatusKind::classify(self.status_label())
    }

    /// Monetary total, treating an absent value as zero.
    pub fn total_amount(&self) -> Decimal {
        self.total.or(self.valor).unwrap_or_default()
    }
}

/// Coarse classification of the ERP's free-text order status, used to pick
/// badge styling. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatusKind {
    Approved,
    Pending,
    Canceled,
    Other,
}

impl OrderStatusKind {
    pub fn classify(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "aprovado" => Self::Approved,
            "pendente" => Self::Pending,
            "cancelado" => Self::Canceled,
            _ => Self::Other,
        }
    }
}

/// A product as the ERP reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub codigo: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub preco: Option<Decimal>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
}

impl Product {
    pub fn code(&self) -> &str {
        self.codigo.as_deref().unwrap_or("-")
    }

    pub fn name(&self) -> &str {
        self.nome.as_deref().unwrap_or("-")
    }

    pub fn price(&self) -> Decimal {
        self.preco.unwrap_or_default()
    }

    /// `P` is the ERP's code for a plain product; other codes pass through.
    pub fn type_label(&self) -> &str {
        match self.tipo.as_deref() {
            Some("P") => "Produto",
            Some(other) => other,
            None => "-",
        }
    }

    pub fn status(&self) -> ProductStatus {
        match self.situacao.as_deref() {
            Some("A") => ProductStatus::Active,
            Some("I") => ProductStatus::Inactive,
            Some(other) => ProductStatus::Other(other.to_string()),
            None => ProductStatus::Other("N/A".to_string()),
        }
    }
}

/// Product status derived from the ERP's one-letter code: `A` is active,
/// `I` inactive, and any other value passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductStatus {
    Active,
    Inactive,
    Other(String),
}

impl ProductStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default, rename = "numeroDocumento")]
    pub numero_documento: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Listing envelope: the ERP rows plus the proxy's `_metadata` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, rename = "_metadata")]
    pub metadata: PageMeta,
}

impl<T> Paged<T> {
    /// Whether another page might exist.
    ///
    /// The proxy reports an explicit `has_more` flag for products but only
    /// `total_items` (a page-local count) for orders, so the single contract
    /// here is: trust the flag when present, otherwise infer from a full
    /// page having been returned.
    pub fn has_more(&self, limit: u32) -> bool {
        self.metadata
            .has_more
            .unwrap_or(self.data.len() as u32 >= limit)
    }
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            metadata: PageMeta::default(),
        }
    }
}

/// Pagination metadata attached by the proxy. All fields are optional since
/// the two listing endpoints disagree on which ones they send.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub has_more: Option<bool>,
}

/// Single-resource envelope (`/orders/{id}/`, `/products/{id}/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Detail<T> {
    #[serde(default)]
    pub data: Option<T>,
}

/// Per-area slice of the dashboard summary. The proxy fetches each area
/// independently and reports a per-area error instead of failing the whole
/// summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySection<T> {
    #[serde(default = "Vec::new")]
    pub recent: Vec<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl<T> Default for SummarySection<T> {
    fn default() -> Self {
        Self {
            recent: Vec::new(),
            error: None,
            total_pages: None,
        }
    }
}

/// Category slice of the dashboard summary; the proxy names the rows `list`
/// here rather than `recent`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategorySection {
    #[serde(default)]
    pub list: Vec<Category>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub products: SummarySection<Product>,
    #[serde(default)]
    pub orders: SummarySection<Order>,
    #[serde(default)]
    pub categories: CategorySection,
}

/// Connection status of the ERP integration. Defaults to not authenticated
/// so a malformed body reads as disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
}

/// Start-of-flow response: the URL the operator must open to authorize the
/// application with the ERP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStart {
    pub auth_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(default)]
    pub api_status: String,
    #[serde(default)]
    pub authentication_status: Option<String>,
}

impl HealthCheck {
    pub fn is_healthy(&self) -> bool {
        self.api_status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_tolerates_missing_fields() {
        let order: Order = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(order.display_number(), 42);
        assert_eq!(order.emission_date(), None);
        assert_eq!(order.customer_name(), "Cliente não informado");
        assert_eq!(order.status_label(), "Indefinido");
        assert_eq!(order.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn order_prefers_new_field_names_over_legacy() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 1,
                "numero": 1001,
                "dataEmissao": "2024-08-01",
                "data": "2024-07-01",
                "contato": {"nome": "Maria"},
                "cliente": "Antigo",
                "situacao": "Aprovado",
                "status": "velho",
                "total": 150.5,
                "valor": 99.0
            }"#,
        )
        .unwrap();
        assert_eq!(order.display_number(), 1001);
        assert_eq!(order.emission_date(), Some("2024-08-01"));
        assert_eq!(order.customer_name(), "Maria");
        assert_eq!(order.status_label(), "Aprovado");
        assert_eq!(order.total_amount(), "150.5".parse().unwrap());
    }

    #[test]
    fn order_falls_back_to_legacy_field_names() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 2,
                "data": "2024-07-15",
                "cliente": "José",
                "status": "pendente",
                "valor": 30
            }"#,
        )
        .unwrap();
        assert_eq!(order.emission_date(), Some("2024-07-15"));
        assert_eq!(order.customer_name(), "José");
        assert_eq!(order.status_label(), "pendente");
        assert_eq!(order.total_amount(), Decimal::from(30));
    }

    #[test]
    fn order_status_classification_is_case_insensitive() {
        assert_eq!(
            OrderStatusKind::classify("APROVADO"),
            OrderStatusKind::Approved
        );
        assert_eq!(
            OrderStatusKind::classify("Pendente"),
            OrderStatusKind::Pending
        );
        assert_eq!(
            OrderStatusKind::classify("cancelado"),
            OrderStatusKind::Canceled
        );
        assert_eq!(
            OrderStatusKind::classify("Em andamento"),
            OrderStatusKind::Other
        );
    }

    #[test]
    fn product_status_codes() {
        let active: Product =
            serde_json::from_str(r#"{"id": 1, "situacao": "A"}"#).unwrap();
        let inactive: Product =
            serde_json::from_str(r#"{"id": 2, "situacao": "I"}"#).unwrap();
        let odd: Product =
            serde_json::from_str(r#"{"id": 3, "situacao": "X"}"#).unwrap();
        let missing: Product = serde_json::from_str(r#"{"id": 4}"#).unwrap();

        assert_eq!(active.status(), ProductStatus::Active);
        assert_eq!(active.status().label(), "Ativo");
        assert_eq!(inactive.status().label(), "Inativo");
        assert_eq!(odd.status().label(), "X");
        assert_eq!(missing.status().label(), "N/A");
    }

    #[test]
    fn product_type_label() {
        let plain: Product =
            serde_json::from_str(r#"{"id": 1, "tipo": "P"}"#).unwrap();
        let service: Product =
            serde_json::from_str(r#"{"id": 2, "tipo": "S"}"#).unwrap();
        assert_eq!(plain.type_label(), "Produto");
        assert_eq!(service.type_label(), "S");
    }

    #[test]
    fn paged_uses_explicit_has_more_flag_when_present() {
        let page: Paged<Product> = serde_json::from_str(
            r#"{"data": [], "_metadata": {"has_more": true}}"#,
        )
        .unwrap();
        assert!(page.has_more(20));
    }

    #[test]
    fn paged_infers_has_more_from_full_page() {
        let rows: Vec<String> =
            (0..20).map(|i| format!(r#"{{"id": {i}}}"#)).collect();
        let body = format!(
            r#"{{"data": [{}], "_metadata": {{"total_items": 20}}}}"#,
            rows.join(",")
        );
        let full: Paged<Order> = serde_json::from_str(&body).unwrap();
        assert!(full.has_more(20));
        assert!(!full.has_more(21));

        let partial: Paged<Order> =
            serde_json::from_str(r#"{"data": [{"id": 1}]}"#).unwrap();
        assert!(!partial.has_more(20));
    }

    #[test]
    fn paged_tolerates_missing_envelope_fields() {
        let page: Paged<Order> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.metadata, PageMeta::default());
    }

    #[test]
    fn dashboard_summary_carries_per_section_errors() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "products": {"recent": [{"id": 1}], "error": null},
                "orders": {"recent": [], "error": "Bling indisponível"},
                "categories": {"list": [{"id": 7, "descricao": "Roupas"}]}
            }"#,
        )
        .unwrap();
        assert_eq!(summary.products.recent.len(), 1);
        assert_eq!(summary.orders.error.as_deref(), Some("Bling indisponível"));
        assert_eq!(summary.categories.list.len(), 1);
    }

    #[test]
    fn auth_status_defaults_to_not_authenticated() {
        let status: AuthStatus = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!status.authenticated);
    }
}
