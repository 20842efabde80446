//! Browse screen controller.
//!
//! # Design
//! `ListController` owns the in-memory list, a busy flag, and the optional
//! pending-delete target. The list is rebuilt from the remote resource on
//! every refresh (screen focus or manual pull); it is not an authoritative
//! cache. Deletion is a two-step flow: `request_delete` validates the id
//! and records the target so the host can show a confirmation prompt, then
//! either `cancel_delete` drops it with zero network calls or
//! `confirm_delete` produces the DELETE request. On success the item is
//! removed from the local list by id match (optimistic removal, no refetch);
//! on failure the list is left unchanged. The pending target is consumed
//! either way.

use crate::client::ListaClient;
use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Item;

/// Controller for the item list screen.
#[derive(Debug, Clone, Default)]
pub struct ListController {
    items: Vec<Item>,
    busy: bool,
    pending_delete: Option<Item>,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Busy distinguishes "loading" from "loaded but empty".
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending_delete(&self) -> Option<&Item> {
        self.pending_delete.as_ref()
    }

    /// Build the collection GET for a refresh (screen focus or manual pull).
    pub fn begin_refresh(&mut self, client: &ListaClient) -> Result<HttpRequest, Error> {
        if self.busy {
            return Err(Error::Validation(
                "a request is already in flight".to_string(),
            ));
        }
        self.busy = true;
        Ok(client.build_list_items())
    }

    /// Replace the local list with the refresh outcome.
    ///
    /// A malformed (non-array) body becomes an empty list; a failed request
    /// leaves the current list untouched. Busy clears on every path.
    pub fn complete_refresh(
        &mut self,
        client: &ListaClient,
        outcome: Result<HttpResponse, Error>,
    ) -> Result<(), Error> {
        self.busy = false;
        let response = outcome?;
        self.items = client.parse_list_items(response)?;
        Ok(())
    }

    /// Record `item` as the pending delete target, to be confirmed or
    /// cancelled by the user. An item without a usable id is rejected
    /// immediately, with zero network calls.
    pub fn request_delete(&mut self, item: &Item) -> Result<&Item, Error> {
        if item.id.is_empty() {
            return Err(Error::Validation("item has no id".to_string()));
        }
        Ok(&*self.pending_delete.insert(item.clone()))
    }

    /// Drop the pending delete target. No network call.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Build the DELETE request for the pending target.
    pub fn confirm_delete(&mut self, client: &ListaClient) -> Result<HttpRequest, Error> {
        if self.busy {
            return Err(Error::Validation(
                "a request is already in flight".to_string(),
            ));
        }
        let pending = self
            .pending_delete
            .as_ref()
            .ok_or_else(|| Error::Validation("no delete is pending".to_string()))?;
        let request = client.build_delete_item(&pending.id);
        self.busy = true;
        Ok(request)
    }

    /// Consume the outcome of the delete round-trip.
    ///
    /// On success the target is removed from the local list by id match; on
    /// failure the list is unchanged. The pending target and busy flag are
    /// consumed/cleared on every path. Returns the removed item.
    pub fn complete_delete(
        &mut self,
        client: &ListaClient,
        outcome: Result<HttpResponse, Error>,
    ) -> Result<Item, Error> {
        self.busy = false;
        let pending = self
            .pending_delete
            .take()
            .ok_or_else(|| Error::Validation("no delete is pending".to_string()))?;
        let response = outcome?;
        client.parse_delete_item(response)?;
        self.items.retain(|item| item.id != pending.id);
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::types::ItemId;

    fn client() -> ListaClient {
        ListaClient::new("http://localhost:3000")
    }

    fn item(id: &str, title: &str) -> Item {
        Item {
            id: ItemId::new(id),
            title: title.to_string(),
            quantity: None,
            price: None,
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn populated(items: &[Item]) -> ListController {
        let mut list = ListController::new();
        list.begin_refresh(&client()).unwrap();
        let body = serde_json::to_string(items).unwrap();
        list.complete_refresh(&client(), Ok(response(200, &body)))
            .unwrap();
        list
    }

    #[test]
    fn refresh_replaces_the_list() {
        let mut list = populated(&[item("1", "Maçã")]);
        assert_eq!(list.items().len(), 1);

        list.begin_refresh(&client()).unwrap();
        list.complete_refresh(
            &client(),
            Ok(response(200, r#"[{"id":"2","titulo":"Pêra"}]"#)),
        )
        .unwrap();
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].title, "Pêra");
        assert!(!list.is_busy());
    }

    #[test]
    fn refresh_sets_busy_for_the_duration() {
        let mut list = ListController::new();
        list.begin_refresh(&client()).unwrap();
        assert!(list.is_busy());
        let err = list.begin_refresh(&client()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        list.complete_refresh(&client(), Ok(response(200, "[]")))
            .unwrap();
        assert!(!list.is_busy());
    }

    #[test]
    fn non_array_body_yields_empty_list_without_error() {
        let mut list = populated(&[item("1", "Maçã")]);
        list.begin_refresh(&client()).unwrap();
        list.complete_refresh(&client(), Ok(response(200, r#"{"error": "down"}"#)))
            .unwrap();
        assert!(list.items().is_empty());
        assert!(!list.is_busy());
    }

    #[test]
    fn failed_refresh_keeps_the_current_list() {
        let mut list = populated(&[item("1", "Maçã")]);
        list.begin_refresh(&client()).unwrap();
        let err = list
            .complete_refresh(&client(), Err(Error::Network("unreachable".into())))
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(list.items().len(), 1);
        assert!(!list.is_busy());
    }

    #[test]
    fn request_delete_rejects_missing_id() {
        let mut list = ListController::new();
        let err = list.request_delete(&item("", "Maçã")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(list.pending_delete().is_none());
    }

    #[test]
    fn request_then_cancel_makes_no_request() {
        let mut list = populated(&[item("1", "Maçã")]);
        let target = item("1", "Maçã");
        let named = list.request_delete(&target).unwrap();
        assert_eq!(named.title, "Maçã");
        list.cancel_delete();
        assert!(list.pending_delete().is_none());
        // Nothing pending, so confirmation has nothing to send.
        let err = list.confirm_delete(&client()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn confirmed_delete_removes_the_item_by_id() {
        let mut list = populated(&[item("1", "Maçã"), item("2", "Pêra")]);
        list.request_delete(&item("1", "Maçã")).unwrap();
        let req = list.confirm_delete(&client()).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/ListaCompras/1");
        assert!(list.is_busy());

        let removed = list
            .complete_delete(&client(), Ok(response(200, "{}")))
            .unwrap();
        assert_eq!(removed.id.as_str(), "1");
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id.as_str(), "2");
        assert!(!list.is_busy());
        assert!(list.pending_delete().is_none());
    }

    #[test]
    fn failed_delete_leaves_the_list_unchanged() {
        let mut list = populated(&[item("1", "Maçã")]);
        list.request_delete(&item("1", "Maçã")).unwrap();
        list.confirm_delete(&client()).unwrap();

        let err = list
            .complete_delete(&client(), Ok(response(404, "no such item")))
            .unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, .. }));
        assert_eq!(list.items().len(), 1);
        assert!(!list.is_busy());
        assert!(list.pending_delete().is_none());
    }

    #[test]
    fn network_failure_consumes_the_pending_target() {
        let mut list = populated(&[item("1", "Maçã")]);
        list.request_delete(&item("1", "Maçã")).unwrap();
        list.confirm_delete(&client()).unwrap();

        let err = list
            .complete_delete(&client(), Err(Error::Network("unreachable".into())))
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(list.items().len(), 1);
        assert!(list.pending_delete().is_none());
        assert!(!list.is_busy());
    }
}
