use super::{ErrorKind, Input, Split, W};

#[test]
fn test_words_and_integers() {
    let mut input = Input::new(b"  Test: divisible by 23", 0);
    let (W(test), _, _, div) = input.next::<(W<&str>, W, W, i64)>().unwrap();
    assert_eq!(test, "Test:");
    assert_eq!(div, 23);
    assert!(input.try_next::<W>().unwrap().is_none());
}

#[test]
fn test_not_integer_span() {
    let mut input = Input::new(b"by twenty", 10);
    let _ = input.next::<W>().unwrap();
    let error = input.next::<i64>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger(n) if &**n == "twenty"));
    assert_eq!(error.span(), 13..19);
}

#[test]
fn test_missing_tuple_element() {
    let mut input = Input::new(b"new = old *", 0);
    let error = input.next::<(W, W, W, W, W)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(5)));
}

#[test]
fn test_split() {
    let mut input = Input::new(b" 79, 98,3", 0);
    let Split(items) = input.next::<Split<',', Vec<i64>>>().unwrap();
    assert_eq!(items, [79, 98, 3]);
    assert!(input.is_empty());

    let mut input = Input::new(b" 79, , 98", 0);
    assert!(input.next::<Split<',', Vec<i64>>>().is_err());

    let mut input = Input::new(b"", 0);
    let Split(items) = input.next::<Split<',', Vec<i64>>>().unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_split_rejects_leftovers() {
    let mut input = Input::new(b"79 98", 16);
    let error = input.next::<Split<',', Vec<i64>>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Trailing(rest) if &**rest == "98"));
    assert_eq!(error.span(), 19..21);

    let mut input = Input::new(b"79, 98 100 ", 0);
    let error = input.next::<Split<',', Vec<i64>>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Trailing(rest) if &**rest == "100"));

    let mut input = Input::new(b"79, ", 0);
    let error = input.next::<Split<',', Vec<i64>>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UnexpectedEof));
    assert_eq!(error.span(), 3..3);
}

#[test]
fn test_lines() {
    let mut input = Input::new(b"first\n\n  third  \nlast", 0);

    let first = input.try_line::<Input>().unwrap().unwrap();
    assert_eq!(first.as_data(), b"first");
    assert_eq!(first.index(), 0);

    let second = input.try_line::<Input>().unwrap().unwrap();
    assert!(second.is_empty());

    let third = input.try_line::<Input>().unwrap().unwrap().trim();
    assert_eq!(third.as_data(), b"third");
    assert_eq!(third.index(), 9);

    let last = input.try_line::<Input>().unwrap().unwrap();
    assert_eq!(last.as_data(), b"last");

    assert!(input.try_line::<Input>().unwrap().is_none());
}
