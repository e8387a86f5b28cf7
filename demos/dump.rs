//! Replays the end-to-end scenario from the original pool's own `main`:
//! intern "Hello World", read it back, clone it past refcount saturation,
//! then dump the pool to stdout.

use stringid::{delete_pool, Pool};

fn main() {
    stringid::init_log();

    let mut pool = Pool::new_pool();
    let mut id = pool.create(b"Hello World").expect("pool has room for a fresh string");
    println!("{}", String::from_utf8_lossy(&pool.read(id)));

    for _ in 0..0x20000 {
        id = pool.clone_id(id).expect("pool has room to duplicate on saturation");
    }

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    pool.dump(&mut lock).expect("writing to stdout does not fail");

    delete_pool(pool);
}
