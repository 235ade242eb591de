mod tests {
    use myrtio_light_forge::control::{
        accept_selection, parse_select_line, select_command, send_select,
    };

    #[test]
    fn test_select_command() {
        assert_eq!(select_command(0), "0\n");
        assert_eq!(select_command(11), "11\n");
    }

    #[test]
    fn test_send_select() {
        let mut wire = Vec::new();
        send_select(&mut wire, 3).unwrap();
        send_select(&mut wire, 10).unwrap();
        assert_eq!(wire, b"3\n10\n");
    }

    #[test]
    fn test_parse_select_line() {
        assert_eq!(parse_select_line("4"), Some(4));
        assert_eq!(parse_select_line("  7"), Some(7));
        assert_eq!(parse_select_line("+2"), Some(2));
        assert_eq!(parse_select_line("-1"), Some(-1));
        assert_eq!(parse_select_line(""), None);
        assert_eq!(parse_select_line("2 "), None);
        assert_eq!(parse_select_line("two"), None);
    }

    #[test]
    fn test_accept_selection() {
        assert_eq!(accept_selection(0, 3), Some(0));
        assert_eq!(accept_selection(2, 3), Some(2));
        assert_eq!(accept_selection(3, 3), None);
        assert_eq!(accept_selection(-1, 3), None);
        assert_eq!(accept_selection(0, 0), None);
    }
}
