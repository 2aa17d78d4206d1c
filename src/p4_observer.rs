// Pattern 4: Observer - Group Broadcast to Subscribed Users
// Demonstrates a publisher fanning notifications out to dynamically
// subscribed observers, with identity-based unsubscription.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

// ============================================================================
// Example: Subscribers
// ============================================================================

trait Subscribe {
    fn notification(&self, msg: &str);
}

struct User {
    user_id: u32,
}

impl User {
    fn new(user_id: u32) -> Self {
        Self { user_id }
    }
}

impl Subscribe for User {
    fn notification(&self, msg: &str) {
        println!("User {} received message: {}", self.user_id, msg);
    }
}

// ============================================================================
// Example: The Group Publisher
// ============================================================================

// Subscribers are shared: the group holds one reference, the caller keeps
// another for later unsubscription.
struct Group {
    users: Vec<Arc<dyn Subscribe>>,
}

impl Group {
    fn new() -> Self {
        Self { users: Vec::new() }
    }

    fn subscribe(&mut self, user: Arc<dyn Subscribe>) {
        self.users.push(user);
    }

    // Removal is by identity, not equality: the exact handle that subscribed.
    fn unsubscribe(&mut self, user: &Arc<dyn Subscribe>) {
        self.users.retain(|existing| !Arc::ptr_eq(existing, user));
    }

    fn notification(&self, msg: &str) {
        for user in &self.users {
            user.notification(msg);
        }
    }
}

fn group_example() {
    let mut group = Group::new();

    let user1: Arc<dyn Subscribe> = Arc::new(User::new(1));
    let user2: Arc<dyn Subscribe> = Arc::new(User::new(2));
    let user3: Arc<dyn Subscribe> = Arc::new(User::new(3));

    group.subscribe(Arc::clone(&user1));
    group.subscribe(Arc::clone(&user2));
    group.subscribe(Arc::clone(&user3));

    group.notification("Welcome to the Group!");

    group.unsubscribe(&user1);
    group.notification("User1 has left the Group.");
}

// ============================================================================
// Example: Channel-based Observer
// ============================================================================

#[derive(Clone)]
struct GroupEvent {
    msg: String,
}

struct Publisher {
    subscribers: Vec<mpsc::Sender<GroupEvent>>,
}

impl Publisher {
    fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    fn subscribe(&mut self) -> mpsc::Receiver<GroupEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self, event: GroupEvent) {
        // Dropped receivers unsubscribe themselves.
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn channel_example() {
    let mut publisher = Publisher::new();

    let rx1 = publisher.subscribe();
    let rx2 = publisher.subscribe();

    let h1 = thread::spawn(move || {
        if let Ok(event) = rx1.recv() {
            println!("Subscriber 1 received: {}", event.msg);
        }
    });
    let h2 = thread::spawn(move || {
        if let Ok(event) = rx2.recv() {
            println!("Subscriber 2 received: {}", event.msg);
        }
    });

    publisher.publish(GroupEvent {
        msg: "Welcome to the Group!".to_string(),
    });

    h1.join().unwrap();
    h2.join().unwrap();
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 4: Observer");
    println!("===================\n");

    println!("=== Group Broadcast (Trait Objects) ===");
    group_example();
    println!();

    println!("=== Channel-based Observer ===");
    channel_example();
}
