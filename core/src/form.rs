//! Register/edit screen controller.
//!
//! # Design
//! `FormController` owns the three bound text fields, the optional edit
//! target, and a busy flag. `submit` validates locally and produces the
//! request (POST for create mode, PUT addressed by the edit target's id for
//! edit mode); the host executes it and feeds the outcome back through
//! `complete_submit`, which clears the busy flag on every exit path.
//! Exactly one network round-trip happens per submit, and the busy flag
//! doubles as the double-submit guard: the host disables the submit control
//! while `is_busy` and a busy submit is rejected as a validation failure.
//!
//! On a successful create the fields are cleared for the next entry; on a
//! successful update they are left as submitted. On any failure the fields
//! retain their values so the user can retry.

use crate::client::ListaClient;
use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Item, ItemDraft};

/// Controller for the item registration form.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    title: String,
    quantity: String,
    price: String,
    edit_target: Option<Item>,
    busy: bool,
}

impl FormController {
    /// Create mode: empty fields, server will assign the id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit mode: fields prefilled from the item selected on the list
    /// screen. The id is carried read-only in the edit target and is never
    /// editable through the form.
    pub fn editing(item: Item) -> Self {
        Self {
            title: item.title.clone(),
            quantity: item.quantity.clone().unwrap_or_default(),
            price: item.price.clone().unwrap_or_default(),
            edit_target: Some(item),
            busy: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_quantity(&mut self, value: impl Into<String>) {
        self.quantity = value.into();
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price = value.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// The item being edited, if the form was opened in edit mode.
    pub fn edit_target(&self) -> Option<&Item> {
        self.edit_target.as_ref()
    }

    /// Validate the fields and build the submit request.
    ///
    /// No request is produced when the trimmed title is empty or another
    /// submission is still in flight; both are local validation failures
    /// with zero network calls.
    pub fn submit(&mut self, client: &ListaClient) -> Result<HttpRequest, Error> {
        if self.busy {
            return Err(Error::Validation(
                "a submission is already in flight".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(Error::Validation("preencha o título".to_string()));
        }

        let draft = ItemDraft::trimmed(&self.title, &self.quantity, &self.price);
        let request = match &self.edit_target {
            Some(item) => client.build_update_item(&item.id, &draft)?,
            None => client.build_create_item(&draft)?,
        };
        self.busy = true;
        Ok(request)
    }

    /// Consume the outcome of the submit round-trip.
    ///
    /// The busy flag is cleared on every path. Returns the item as the
    /// server recorded it; create mode also clears the fields.
    pub fn complete_submit(
        &mut self,
        client: &ListaClient,
        outcome: Result<HttpResponse, Error>,
    ) -> Result<Item, Error> {
        self.busy = false;
        let response = outcome?;
        let item = match &self.edit_target {
            Some(_) => client.parse_update_item(response)?,
            None => client.parse_create_item(response)?,
        };
        if self.edit_target.is_none() {
            self.title.clear();
            self.quantity.clear();
            self.price.clear();
        }
        Ok(item)
    }
}
