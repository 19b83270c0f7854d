use crate::base;

/// A ledger together with how it is currently being looked at.
#[derive(Debug, Default)]
pub struct Book {
    ledger: base::Ledger,
    sort: base::SortState,
    query: base::Query,
    /// Lowest id that may be handed out. Never decreases, so an id freed by a
    /// delete is not given to a later transaction of the same session.
    next_id: base::Id,
    /// Set if the snapshot could not be read and `ledger` is a stand-in.
    damaged: Option<base::store::LoadError>,
}

impl Book {
    pub fn ledger(&self) -> &base::Ledger {
        &self.ledger
    }

    pub fn sort_state(&self) -> &base::SortState {
        &self.sort
    }

    /// Current filter, search and sort, ready to apply.
    pub fn query(&self) -> base::Query {
        base::Query {
            sort: self.sort.active(),
            ..self.query.clone()
        }
    }

    pub fn frame(&self) -> base::Frame {
        base::view::frame(&self.ledger, &self.query())
    }

    pub fn damaged(&self) -> Option<&base::store::LoadError> {
        self.damaged.as_ref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] base::ValidationError),
    #[error("refusing to overwrite unreadable snapshot '{}'", .path.display())]
    Damaged { path: std::path::PathBuf },
    #[error(transparent)]
    Load(#[from] base::store::LoadError),
    #[error(transparent)]
    Save(#[from] base::store::SaveError),
}

/// Both ledgers and their view state. Ledgers are loaded on first use.
pub struct Session<'a> {
    fs: &'a base::Fs,
    kind: base::Kind,
    books: std::collections::HashMap<base::Kind, Book>,
}

impl<'a> Session<'a> {
    pub fn open(fs: &'a base::Fs, kind: base::Kind) -> Result<Self, base::store::LoadError> {
        let mut session = Self {
            fs,
            kind,
            books: Default::default(),
        };
        session.ensure_loaded(kind)?;
        Ok(session)
    }

    fn ensure_loaded(&mut self, kind: base::Kind) -> Result<(), base::store::LoadError> {
        if self.books.contains_key(&kind) {
            return Ok(());
        }
        let (ledger, err) = base::Store::new(self.fs, kind).load_or_empty()?;
        let book = Book {
            next_id: ledger.next_id(),
            ledger,
            damaged: err,
            ..Default::default()
        };
        self.books.insert(kind, book);
        Ok(())
    }

    pub fn kind(&self) -> base::Kind {
        self.kind
    }

    pub fn fs(&self) -> &'a base::Fs {
        self.fs
    }

    /// Makes `kind` the active ledger. Each kind keeps its own view state.
    pub fn switch(&mut self, kind: base::Kind) -> Result<(), base::store::LoadError> {
        self.ensure_loaded(kind)?;
        log::debug!("switching from {} to {}", self.kind, kind);
        self.kind = kind;
        Ok(())
    }

    pub fn book(&self) -> &Book {
        &self.books[&self.kind]
    }

    fn book_mut(&mut self) -> &mut Book {
        self.books
            .get_mut(&self.kind)
            .expect("active book should have been loaded")
    }

    fn store(&self) -> base::Store<'a> {
        base::Store::new(self.fs, self.kind)
    }

    /// Runs `f` on a copy of the active ledger, persists the copy and only
    /// then makes it current.
    fn commit<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut base::Ledger) -> T,
    {
        let store = self.store();
        let book = self.book_mut();
        if book.damaged.is_some() {
            return Err(Error::Damaged { path: store.path() });
        }
        let mut ledger = book.ledger.clone();
        let out = f(&mut ledger);
        store.save(&ledger)?;
        book.ledger = ledger;
        Ok(out)
    }

    /// Validates and appends a transaction. Nothing changes on error.
    pub fn submit(&mut self, draft: &base::Draft) -> Result<base::Id, Error> {
        let fields = draft.validate()?;
        let book = self.book();
        let id = book.next_id.max(book.ledger.next_id());
        self.commit(|ledger| ledger.push_as(id, fields))?;
        self.book_mut().next_id = base::Id(id.0 + 1);
        log::debug!("added {} {}", self.kind, id);
        Ok(id)
    }

    /// Overlays `patch` onto the transaction with the given id. Returns the
    /// updated transaction, or `None` if there is no such transaction.
    pub fn edit(
        &mut self,
        id: base::Id,
        patch: &base::Patch,
    ) -> Result<Option<base::Transaction>, Error> {
        let Some(current) = self.book().ledger.get(id) else {
            log::debug!("no {} with id {} to edit", self.kind, id);
            return Ok(None);
        };
        let fields = patch.apply(current.to_draft()).validate()?;
        self.commit(|ledger| ledger.replace(id, fields))?;
        Ok(self.book().ledger.get(id).cloned())
    }

    /// Removes the transaction with the given id. Returns it, or `None` if
    /// there is no such transaction.
    pub fn delete(&mut self, id: base::Id) -> Result<Option<base::Transaction>, Error> {
        if self.book().ledger.get(id).is_none() {
            log::debug!("no {} with id {} to delete", self.kind, id);
            return Ok(None);
        }
        self.commit(|ledger| ledger.remove(id))
    }

    pub fn sort(&mut self, column: base::Column) -> base::Direction {
        let direction = self.book_mut().sort.toggle(column);
        log::debug!("sorting {} by {} {}", self.kind, column, direction);
        direction
    }

    pub fn search(&mut self, query: &str) {
        log::debug!("searching {} for {:?}", self.kind, query);
        self.book_mut().query.search = query.trim().to_string();
    }

    pub fn filter<T, U>(&mut self, interval: base::Interval, categories: &[T], not_categories: &[U])
    where
        T: AsRef<str>,
        U: AsRef<str>,
    {
        log::debug!("filtering {} to {}", self.kind, interval);
        let query = &mut self.book_mut().query;
        query.interval = interval;
        query.categories = categories.iter().map(|s| s.as_ref().to_string()).collect();
        query.not_categories = not_categories
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect();
    }

    /// Drops the filter and the search query. The sort order is kept.
    pub fn clear(&mut self) {
        log::debug!("clearing filters on {}", self.kind);
        self.book_mut().query = base::Query::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tempfs() -> (base::Fs, tempfile::TempDir) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = base::Fs::new(td.path());
        (fs, td)
    }

    fn names(session: &Session) -> Vec<String> {
        session
            .book()
            .frame()
            .rows
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn test_submit() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        let food_before = session.book().frame().totals.get("Food").unwrap();
        let len_before = session.book().ledger().len();

        let draft = base::Draft::new("Coffee", "Food", "3.50", "2024-11-01");
        let id = session.submit(&draft).unwrap();

        assert_eq!(id, base::Id(4));
        assert_eq!(session.book().ledger().len(), len_before + 1);
        let frame = session.book().frame();
        let row = frame.rows.iter().find(|r| r.id == id).unwrap();
        assert_eq!(row.amount, "3.50");
        assert_eq!(
            frame.totals.get("Food").unwrap(),
            food_before + base::Cents(350)
        );
        // Persisted.
        let reloaded = base::Store::new(&fs, base::Kind::Expense).load().unwrap();
        assert_eq!(&reloaded, session.book().ledger());
    }

    #[test]
    fn test_submit_rejects_empty_name() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        let before = session.book().ledger().clone();
        let draft = base::Draft::new("  ", "Food", "3.50", "2024-11-01");
        let err = session.submit(&draft).unwrap_err();
        assert_eq!(err.to_string(), "missing name");
        assert_eq!(session.book().ledger(), &before);
    }

    #[test]
    fn test_delete_one_of_duplicates() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        let lunch = base::Draft::new("Lunch", "Food", "12.99", "2024-10-20");
        let id = session.submit(&lunch).unwrap();
        assert_eq!(names(&session).iter().filter(|n| *n == "Lunch").count(), 2);

        let removed = session.delete(id).unwrap().unwrap();
        assert_eq!(removed.id(), id);
        assert_eq!(names(&session), vec!["Lunch", "Uber", "Movie Ticket"]);
    }

    #[test]
    fn test_deleted_id_is_not_reissued() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        assert!(session.delete(base::Id(3)).unwrap().is_some());
        let coffee = base::Draft::new("Coffee", "Food", "3.50", "2024-11-01");
        assert_eq!(session.submit(&coffee).unwrap(), base::Id(4));

        // A repeated delete of the old id must not hit the new transaction.
        assert_eq!(session.delete(base::Id(3)).unwrap(), None);
        assert_eq!(names(&session), vec!["Lunch", "Uber", "Coffee"]);

        assert!(session.delete(base::Id(4)).unwrap().is_some());
        assert_eq!(session.submit(&coffee).unwrap(), base::Id(5));
    }

    #[test]
    fn test_largest_amount_survives_reload() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Income).unwrap();
        let windfall = base::Draft::new("Windfall", "Luck", "9999999999999.99", "2024-11-01");
        let id = session.submit(&windfall).unwrap();
        let too_big = base::Draft::new("Windfall", "Luck", "10000000000000", "2024-11-01");
        assert!(matches!(
            session.submit(&too_big),
            Err(Error::Validation(base::ValidationError::Amount(_)))
        ));

        let reopened = Session::open(&fs, base::Kind::Income).unwrap();
        assert!(reopened.book().damaged().is_none());
        assert_eq!(reopened.book().ledger(), session.book().ledger());
        let tx = reopened.book().ledger().get(id).unwrap();
        assert_eq!(tx.amount(), base::Cents::MAX);

        // Still writable afterwards.
        let mut reopened = reopened;
        reopened.submit(&windfall).unwrap();
        assert_eq!(reopened.book().frame().totals.sum(), base::Cents(2 * base::Cents::MAX.0));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        let before = session.book().ledger().clone();
        assert_eq!(session.delete(base::Id(99)).unwrap(), None);
        let patch = base::Patch {
            name: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(session.edit(base::Id(99), &patch).unwrap(), None);
        assert_eq!(session.book().ledger(), &before);
    }

    #[test]
    fn test_edit_in_place() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        let patch = base::Patch {
            amount: Some("9.00".to_string()),
            ..Default::default()
        };
        let updated = session.edit(base::Id(2), &patch).unwrap().unwrap();
        assert_eq!(updated.name(), "Uber");
        assert_eq!(updated.amount(), base::Cents(900));
        assert_eq!(session.book().ledger().as_slice()[1], updated);

        let bad = base::Patch {
            date: Some("2024-13-01".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            session.edit(base::Id(2), &bad),
            Err(Error::Validation(base::ValidationError::Date(_)))
        ));
        assert_eq!(session.book().ledger().as_slice()[1], updated);
    }

    #[test]
    fn test_view_state() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        session.search("FOOD");
        assert_eq!(names(&session), vec!["Lunch"]);
        session.search("");
        assert_eq!(session.sort(base::Column::Amount), base::Direction::Ascending);
        assert_eq!(names(&session), vec!["Uber", "Lunch", "Movie Ticket"]);
        assert_eq!(session.sort(base::Column::Amount), base::Direction::Descending);
        assert_eq!(names(&session), vec!["Movie Ticket", "Lunch", "Uber"]);

        session.filter(
            "2024-10-21:".parse().unwrap(),
            &["*"],
            &[] as &[&str],
        );
        assert_eq!(names(&session), vec!["Movie Ticket", "Uber"]);
        assert_eq!(session.book().frame().totals.sum(), base::Cents(2350));

        session.clear();
        assert_eq!(names(&session), vec!["Movie Ticket", "Lunch", "Uber"]);
    }

    #[test]
    fn test_kinds_keep_separate_state() {
        let (fs, _td) = tempfs();
        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        session.search("uber");
        session.switch(base::Kind::Income).unwrap();
        assert!(session.book().ledger().is_empty());
        let salary = base::Draft::new("Salary", "Job", "5000", "2024-10-01");
        session.submit(&salary).unwrap();
        assert_eq!(names(&session), vec!["Salary"]);

        session.switch(base::Kind::Expense).unwrap();
        assert_eq!(names(&session), vec!["Uber"]);
        assert_eq!(session.book().ledger().len(), 3);
    }

    #[test]
    fn test_damaged_snapshot() {
        let (fs, _td) = tempfs();
        let store = base::Store::new(&fs, base::Kind::Expense);
        std::fs::write(store.path(), "[{").unwrap();

        let mut session = Session::open(&fs, base::Kind::Expense).unwrap();
        assert!(session.book().ledger().is_empty());
        assert!(session.book().damaged().is_some());

        let draft = base::Draft::new("Coffee", "Food", "3.50", "2024-11-01");
        assert!(matches!(
            session.submit(&draft),
            Err(Error::Damaged { .. })
        ));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[{");
    }
}
