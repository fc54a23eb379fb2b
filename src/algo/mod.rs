pub(crate) mod munkres;
