//! Owned collections of quotes and pending orders.

use indexmap::IndexMap;

use crate::error::OrderError;
use crate::order::{NewOrder, Order, OrderId};
use crate::quote::Quote;

/// Quotes keyed by symbol, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct QuoteList {
    quotes: IndexMap<String, Quote>,
}

impl QuoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the quote for `quote.symbol`.
    ///
    /// Replacing keeps the original position.
    pub fn insert(&mut self, quote: Quote) {
        self.quotes.insert(quote.symbol.clone(), quote);
    }

    pub fn find(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.get(symbol)
    }

    pub(crate) fn find_mut(&mut self, symbol: &str) -> Option<&mut Quote> {
        self.quotes.get_mut(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.quotes.contains_key(symbol)
    }

    pub fn get_index(&self, index: usize) -> Option<&Quote> {
        self.quotes.get_index(index).map(|(_, quote)| quote)
    }

    pub fn first(&self) -> Option<&Quote> {
        self.get_index(0)
    }

    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.quotes.get_index_of(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.quotes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.values()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl FromIterator<Quote> for QuoteList {
    fn from_iter<T: IntoIterator<Item = Quote>>(iter: T) -> Self {
        let mut list = QuoteList::new();
        for quote in iter {
            list.insert(quote);
        }
        list
    }
}

/// Pending orders in insertion order.
#[derive(Debug, Clone)]
pub struct OrderList {
    orders: Vec<Order>,
    next_id: u32,
}

impl Default for OrderList {
    fn default() -> Self {
        OrderList {
            orders: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` and append it.
    ///
    /// Invalid candidates are dropped and the collection is left untouched.
    pub fn add(&mut self, candidate: NewOrder) -> Result<&Order, OrderError> {
        candidate.validate()?;

        let id = OrderId(self.next_id);
        self.next_id += 1;
        self.orders.push(Order::from_new_order(id, candidate));

        let last = self.orders.len() - 1;
        Ok(&self.orders[last])
    }

    /// Remove the order with `id`, returning it if it was present.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(pos))
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Orders for `symbol`, in collection order.
    pub fn where_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |o| o.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    #[test]
    fn quote_list_keeps_insertion_order() {
        let quotes: QuoteList = [
            Quote::new("HUMOR", 88.50),
            Quote::new("CLOTH", 81.70),
            Quote::new("HABIT", 98.00),
        ]
        .into_iter()
        .collect();

        assert_eq!(quotes.symbols().collect::<Vec<_>>(), ["HUMOR", "CLOTH", "HABIT"]);
        assert_eq!(quotes.first().map(|q| q.symbol.as_str()), Some("HUMOR"));
        assert_eq!(quotes.index_of("HABIT"), Some(2));
        assert_eq!(quotes.find("CLOTH").map(|q| q.price), Some(81.70));
        assert!(quotes.find("NOPE").is_none());
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut orders = OrderList::new();
        let first = orders.add(NewOrder::new("AAPL", 90.0, 100.0, Side::Buy)).unwrap().id;
        let second = orders.add(NewOrder::new("AAPL", 110.0, 100.0, Side::Sell)).unwrap().id;

        assert_eq!(first, OrderId(1));
        assert_eq!(second, OrderId(2));
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn invalid_candidate_never_enters_the_list() {
        let mut orders = OrderList::new();
        let err = orders
            .add(NewOrder::new("AAPL", 120.0, 100.0, Side::Buy))
            .unwrap_err();

        assert!(matches!(err, OrderError::BuyAboveMarket { .. }));
        assert!(orders.is_empty());

        // Rejected candidates do not consume ids.
        let id = orders.add(NewOrder::new("AAPL", 80.0, 100.0, Side::Buy)).unwrap().id;
        assert_eq!(id, OrderId(1));
    }

    #[test]
    fn where_symbol_filters_in_collection_order() {
        let mut orders = OrderList::new();
        orders.add(NewOrder::new("AAPL", 90.0, 100.0, Side::Buy)).unwrap();
        orders.add(NewOrder::new("MSFT", 60.0, 50.0, Side::Sell)).unwrap();
        orders.add(NewOrder::new("AAPL", 120.0, 100.0, Side::Sell)).unwrap();

        let ids: Vec<u32> = orders.where_symbol("AAPL").map(|o| o.id.0).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn remove_is_exactly_once() {
        let mut orders = OrderList::new();
        let id = orders.add(NewOrder::new("AAPL", 90.0, 100.0, Side::Buy)).unwrap().id;

        assert!(orders.remove(id).is_some());
        assert!(orders.remove(id).is_none());
        assert!(orders.is_empty());
    }
}
