//! RecordStore tests
