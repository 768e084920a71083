use relay_chain::{start, DynamicChain};
use relay_core::{effect, gate};
use relay_flow::{If, Try};

#[derive(Debug, Default, PartialEq)]
struct Request {
    path: String,
    cached: Option<String>,
    body: String,
    status: u16,
}

#[test]
fn combinators_inside_chain() {
    let lookup_cache = gate(|req: &mut Request| match req.cached.take() {
        Some(body) => {
            req.body = body;
            true
        }
        None => false,
    });
    let render = effect(|req: &mut Request| req.body = format!("rendered {}", req.path));

    let mut chain: DynamicChain<Request> = DynamicChain::new();
    chain |= effect(|req: &mut Request| req.path = req.path.trim_end_matches('/').to_string());
    chain |= Try::new(lookup_cache).fallback(render);
    chain |= If::new(|req: &mut Request| req.body.is_empty())
        .then(effect(|req: &mut Request| req.status = 404))
        .otherwise(effect(|req: &mut Request| req.status = 200));

    let mut cold = Request {
        path: "/home/".to_string(),
        ..Request::default()
    };
    chain.invoke(&mut cold);
    assert_eq!(cold.body, "rendered /home");
    assert_eq!(cold.status, 200);

    let mut warm = Request {
        path: "/home".to_string(),
        cached: Some("from cache".to_string()),
        ..Request::default()
    };
    chain.clone().invoke(&mut warm);
    assert_eq!(warm.body, "from cache");
    assert_eq!(warm.cached, None);
}

#[test]
fn combinators_inside_sequence() {
    let mut sequence = start()
        | If::new(|(a, _): &mut (i32, i32)| *a > 5).then(effect(|(a, _): &mut (i32, i32)| *a *= 2))
        | Try::new(gate(|(_, b): &mut (i32, i32)| *b != 0))
            .fallback(effect(|(_, b): &mut (i32, i32)| *b = 1));

    let mut args = (10, 0);
    sequence.invoke(&mut args);
    assert_eq!(args, (20, 1));

    let mut args = (3, 7);
    sequence.invoke(&mut args);
    assert_eq!(args, (3, 7));
}
