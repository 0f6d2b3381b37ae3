pub(crate) mod iso8601;
