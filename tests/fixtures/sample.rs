use std::cell::Cell;
use std::rc::Rc;

fn fibonacci(n: u32) -> u32 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

fn add(x: i32, y: i32) -> i32 {
    x + y
}

fn process_array(values: &mut [i32]) {
    for value in values.iter_mut() {
        *value *= 2;
    }
}

fn process() -> Vec<i32> {
    let mut values = vec![3, 1, 4, 1, 5, 9];
    values.sort_by(|a, b| b.cmp(a));
    values
}

struct Calculator {
    cleanups: Rc<Cell<u32>>,
}

impl Calculator {
    fn new(cleanups: Rc<Cell<u32>>) -> Self {
        Calculator { cleanups }
    }

    fn add(&self, x: i32, y: i32) -> i32 {
        x + y
    }

    fn cleanup(&self) {
        self.cleanups.set(self.cleanups.get() + 1);
    }
}

impl Drop for Calculator {
    fn drop(&mut self) {
        self.cleanup();
    }
}
