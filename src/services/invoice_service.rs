use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

use crate::{
    dto::{
        invoices::{CreateInvoiceRequest, InvoiceView, UpdateInvoiceRequest},
        orders::OrderView,
    },
    entity::{
        Invoices, Orders,
        invoices::{ActiveModel as InvoiceActive, Column as InvoiceCol, Model as InvoiceModel},
    },
    error::{AppError, AppResult},
    ids::{new_id, now},
    models::Invoice,
    services::{
        order_view::view_for_order,
        pagination::{Page, PageWindow, list_page},
        references::ensure_exists,
    },
    state::AppState,
};

pub const DEFAULT_PAYMENT_STATUS: &str = "PENDING";
const MISSING_PAYMENT_METHOD: &str = "null";

pub async fn list_invoices(state: &AppState, window: PageWindow) -> AppResult<Page<Invoice>> {
    state
        .bounded(async {
            let finder = Invoices::find()
                .order_by_asc(InvoiceCol::CreatedAt)
                .order_by_asc(InvoiceCol::Id);
            let page = list_page(&state.orm, finder, window).await?;
            Ok(page.map(Invoice::from))
        })
        .await
}

pub async fn create_invoice(state: &AppState, payload: CreateInvoiceRequest) -> AppResult<Invoice> {
    state
        .bounded(async {
            ensure_exists::<Orders, _>(&state.orm, &payload.order_id).await?;

            let payment_status = match payload.payment_status {
                Some(status) => non_blank(status, "payment_status")?,
                None => DEFAULT_PAYMENT_STATUS.to_string(),
            };
            let payment_method = payload
                .payment_method
                .map(|method| non_blank(method, "payment_method"))
                .transpose()?;

            let stamped = now();
            let invoice = InvoiceActive {
                id: Set(new_id()),
                order_id: Set(payload.order_id),
                payment_method: Set(payment_method),
                payment_status: Set(payment_status),
                payment_due_date: Set(stamped),
                created_at: Set(stamped),
                updated_at: Set(stamped),
            }
            .insert(&state.orm)
            .await?;

            tracing::info!(invoice_id = %invoice.id, order_id = %invoice.order_id, "invoice created");
            Ok(Invoice::from(invoice))
        })
        .await
}

pub async fn update_invoice(
    state: &AppState,
    id: &str,
    payload: UpdateInvoiceRequest,
) -> AppResult<Invoice> {
    state
        .bounded(async {
            let existing = Invoices::find_by_id(id.to_string()).one(&state.orm).await?;
            if existing.is_none() {
                return Err(AppError::NotFound);
            }
            let invoice = invoice_patch(id, payload)?.update(&state.orm).await?;
            Ok(Invoice::from(invoice))
        })
        .await
}

pub fn invoice_patch(id: &str, payload: UpdateInvoiceRequest) -> AppResult<InvoiceActive> {
    let payment_method = match payload.payment_method {
        Some(method) => Set(Some(non_blank(method, "payment_method")?)),
        None => NotSet,
    };
    let payment_status = match payload.payment_status {
        Some(status) => Set(non_blank(status, "payment_status")?),
        None => NotSet,
    };
    Ok(InvoiceActive {
        id: Unchanged(id.to_string()),
        order_id: NotSet,
        payment_method,
        payment_status,
        payment_due_date: NotSet,
        created_at: NotSet,
        updated_at: Set(now()),
    })
}

/// Look up the invoice and combine it with the first group of its order's view.
pub async fn invoice_view(state: &AppState, id: &str) -> AppResult<InvoiceView> {
    state
        .bounded(async {
            let invoice = Invoices::find_by_id(id.to_string())
                .one(&state.orm)
                .await?
                .ok_or(AppError::NotFound)?;

            let view = view_for_order(&state.orm, &invoice.order_id)
                .await?
                .ok_or_else(|| AppError::EmptyOrder(invoice.order_id.clone()))?;

            Ok(assemble_invoice_view(invoice, view))
        })
        .await
}

pub fn assemble_invoice_view(invoice: InvoiceModel, view: OrderView) -> InvoiceView {
    InvoiceView {
        invoice_id: invoice.id,
        payment_method: invoice
            .payment_method
            .unwrap_or_else(|| MISSING_PAYMENT_METHOD.to_string()),
        order_id: invoice.order_id,
        payment_status: invoice.payment_status,
        payment_due: view.payment_due,
        table_number: view.table_number,
        payment_due_date: invoice.payment_due_date,
        order_details: view.order_items,
    }
}

fn non_blank(value: String, field: &str) -> AppResult<String> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be blank")));
    }
    Ok(value)
}
