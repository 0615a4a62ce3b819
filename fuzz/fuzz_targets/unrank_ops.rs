#![no_main]
use libfuzzer_sys::fuzz_target;
use unrank::{CyclicPermutations, Permutations};

fuzz_target!(|data: (u8, u8, u64)| {
    let (a, b, seed) = data;
    let n = (a % 9) as i32;
    let r = (b % (n as u8 + 1)) as i32;

    let mut gen = match Permutations::new(n, r) {
        Ok(g) => g,
        Err(_) => return,
    };
    let total = gen.total_count();
    assert!(total >= 1);
    let k = (seed % total as u64) as i64;

    let direct = gen.unrank(k);
    assert_eq!(direct.len(), r as usize);
    assert_eq!(gen.checked_unrank(k).unwrap(), direct);

    // all symbols in range and distinct
    let mut used = vec![false; n as usize];
    for &s in &direct {
        assert!(s >= 0 && s < n);
        assert!(!used[s as usize]);
        used[s as usize] = true;
    }

    gen.jump_to(k);
    assert_eq!(gen.next_rank(), k);
    assert_eq!(gen.successor(), direct);
    assert_eq!(gen.next_rank(), (k + 1) % total);

    // the cyclic family agrees with itself through jump + successor too
    if let Ok(mut cyc) = CyclicPermutations::new(n, r) {
        let ck = (seed % cyc.total_count() as u64) as i64;
        let expected = cyc.unrank(ck);
        cyc.jump_to(ck);
        assert_eq!(cyc.successor(), expected);
    }
});
