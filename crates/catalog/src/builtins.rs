use crate::def::{Coordinates, MenuItemDef, PriceRange, RestaurantDef};

const STANDARD_HOURS: &[(&str, &str)] = &[
	("Monday", "11:00 AM - 9:00 PM"),
	("Tuesday", "11:00 AM - 9:00 PM"),
	("Wednesday", "11:00 AM - 9:00 PM"),
	("Thursday", "11:00 AM - 9:00 PM"),
	("Friday", "11:00 AM - 10:00 PM"),
	("Saturday", "11:00 AM - 10:00 PM"),
	("Sunday", "12:00 PM - 8:00 PM"),
];

/// Restaurants bundled with the site.
pub static RESTAURANTS: &[RestaurantDef] = &[
	RestaurantDef {
		id: "1",
		slug: "moms-og",
		name: "Mom's OG",
		cuisine: &["American", "Comfort Food"],
		rating: 4.7,
		review_count: 342,
		description: "Home-style comfort food with a modern twist, just like mom used to make.",
		long_description: "Mom's OG brings authentic home-style cooking to the UF campus area. Known for their generous portions and comfort food classics, this family-owned restaurant has been serving the Gainesville community with love and care. Every dish is prepared fresh daily using traditional recipes passed down through generations.",
		address: "123 University Ave, Gainesville, FL 32601",
		phone: "(352) 555-0101",
		website: Some("https://momsog.com"),
		hours: STANDARD_HOURS,
		coordinates: Coordinates::new(29.6516, -82.3248),
		distance_from_campus: "0.2 miles",
		price_range: PriceRange::Moderate,
		image: "/restaurants/moms-og-hero.jpg",
		gallery: &["/restaurants/moms-og-1.jpg", "/restaurants/moms-og-2.jpg"],
		specialties: &["Mac & Cheese", "Fried Chicken", "Meatloaf"],
		student_discount: "15% off with student ID",
		popular_items: &["Signature Mac & Cheese", "Crispy Fried Chicken", "Homestyle Meatloaf"],
		menu: &[
			MenuItemDef::new("m1", "Signature Mac & Cheese", "Three-cheese blend with crispy breadcrumb topping", 12.99, "Mains")
				.popular()
				.dietary(&["Vegetarian"]),
			MenuItemDef::new("m2", "Crispy Fried Chicken", "Buttermilk fried chicken with mashed potatoes and gravy", 16.99, "Mains").popular(),
			MenuItemDef::new("m3", "Loaded Potato Skins", "Crispy potato skins with cheese, bacon, and sour cream", 8.99, "Appetizers"),
		],
	},
	RestaurantDef {
		id: "2",
		slug: "chicken-salad-chick",
		name: "Chicken Salad Chick",
		cuisine: &["American", "Salads", "Sandwiches"],
		rating: 4.8,
		review_count: 567,
		description: "Fresh chicken salad varieties and southern-inspired sides with a cozy atmosphere.",
		long_description: "Chicken Salad Chick specializes in made-from-scratch chicken salad with over a dozen unique flavors. From classic to creative combinations, each recipe is crafted with premium ingredients and served with genuine southern hospitality. Perfect for a quick, healthy meal between classes.",
		address: "456 SW 13th St, Gainesville, FL 32601",
		phone: "(352) 555-0102",
		website: None,
		hours: &[
			("Monday", "10:30 AM - 8:00 PM"),
			("Tuesday", "10:30 AM - 8:00 PM"),
			("Wednesday", "10:30 AM - 8:00 PM"),
			("Thursday", "10:30 AM - 8:00 PM"),
			("Friday", "10:30 AM - 8:00 PM"),
			("Saturday", "10:30 AM - 8:00 PM"),
			("Sunday", "11:00 AM - 6:00 PM"),
		],
		coordinates: Coordinates::new(29.6496, -82.3287),
		distance_from_campus: "0.3 miles",
		price_range: PriceRange::Moderate,
		image: "/restaurants/chicken-salad-chick-hero.jpg",
		gallery: &["/restaurants/csc-1.jpg", "/restaurants/csc-2.jpg"],
		specialties: &["Classic Carol", "Cranberry Kelli", "Jalapeño Holly"],
		student_discount: "10% off combo meals",
		popular_items: &["Classic Carol Sandwich", "Cranberry Kelli", "Southern Soul Soup"],
		menu: &[
			MenuItemDef::new("csc1", "Classic Carol", "Traditional chicken salad with mayo, celery, and seasonings", 9.99, "Chicken Salads").popular(),
			MenuItemDef::new("csc2", "Cranberry Kelli", "Chicken salad with dried cranberries and pecans", 10.99, "Chicken Salads").popular(),
			MenuItemDef::new("csc3", "Jalapeño Holly", "Spicy chicken salad with jalapeños and pepper jack cheese", 10.99, "Chicken Salads").student_special(),
		],
	},
	RestaurantDef {
		id: "3",
		slug: "big-mills-cheesesteaks",
		name: "Big Mills Cheesesteaks",
		cuisine: &["American", "Sandwiches", "Philadelphia"],
		rating: 4.6,
		review_count: 289,
		description: "Authentic Philadelphia-style cheesesteaks made with premium ingredients.",
		long_description: "Big Mills brings the authentic taste of Philadelphia to Gainesville with traditional cheesesteaks made the right way. Using thinly sliced ribeye, fresh-baked hoagie rolls, and real Cheez Whiz, every sandwich is a genuine Philly experience that will transport you straight to South Street.",
		address: "789 W University Ave, Gainesville, FL 32601",
		phone: "(352) 555-0103",
		website: None,
		hours: &[
			("Monday", "11:00 AM - 9:00 PM"),
			("Tuesday", "11:00 AM - 9:00 PM"),
			("Wednesday", "11:00 AM - 9:00 PM"),
			("Thursday", "11:00 AM - 9:00 PM"),
			("Friday", "11:00 AM - 10:00 PM"),
			("Saturday", "11:00 AM - 10:00 PM"),
			("Sunday", "Closed"),
		],
		coordinates: Coordinates::new(29.6512, -82.3301),
		distance_from_campus: "0.4 miles",
		price_range: PriceRange::Moderate,
		image: "/restaurants/big-mills-hero.jpg",
		gallery: &["/restaurants/big-mills-1.jpg", "/restaurants/big-mills-2.jpg"],
		specialties: &["Classic Cheesesteak", "Chicken Cheesesteak", "Philly Fries"],
		student_discount: "Free drink with any cheesesteak",
		popular_items: &["Classic Cheesesteak", "Chicken Cheesesteak", "Loaded Philly Fries"],
		menu: &[
			MenuItemDef::new("bm1", "Classic Cheesesteak", "Thinly sliced ribeye with Cheez Whiz on a hoagie roll", 12.99, "Cheesesteaks").popular(),
			MenuItemDef::new("bm2", "Chicken Cheesesteak", "Grilled chicken with peppers, onions, and provolone", 11.99, "Cheesesteaks").popular(),
			MenuItemDef::new("bm3", "Loaded Philly Fries", "Fresh-cut fries topped with cheesesteak meat and cheese", 9.99, "Sides").student_special(),
		],
	},
	RestaurantDef {
		id: "4",
		slug: "gumbys-pizza",
		name: "Gumby's Pizza",
		cuisine: &["Pizza", "Wings", "Late Night"],
		rating: 4.5,
		review_count: 892,
		description: "Late-night pizza and wings perfect for studying sessions and group hangouts.",
		long_description: "Gumby's Pizza has been a UF campus institution for decades, serving up hot, cheesy pizza and crispy wings until the early morning hours. Known for their generous toppings, affordable prices, and late-night delivery, Gumby's is the go-to spot for students pulling all-nighters.",
		address: "321 SW 2nd Ave, Gainesville, FL 32601",
		phone: "(352) 555-0104",
		website: None,
		hours: &[
			("Monday", "4:00 PM - 3:00 AM"),
			("Tuesday", "4:00 PM - 3:00 AM"),
			("Wednesday", "4:00 PM - 3:00 AM"),
			("Thursday", "4:00 PM - 3:00 AM"),
			("Friday", "4:00 PM - 4:00 AM"),
			("Saturday", "4:00 PM - 4:00 AM"),
			("Sunday", "4:00 PM - 2:00 AM"),
		],
		coordinates: Coordinates::new(29.6485, -82.3267),
		distance_from_campus: "0.2 miles",
		price_range: PriceRange::Budget,
		image: "/restaurants/gumbys-hero.jpg",
		gallery: &["/restaurants/gumbys-1.jpg", "/restaurants/gumbys-2.jpg"],
		specialties: &["Stoner Pie", "Garlic Knots", "Buffalo Wings"],
		student_discount: "Student special: Large pizza + 2 drinks for $15",
		popular_items: &["Stoner Pie Pizza", "Garlic Knots", "Buffalo Wings"],
		menu: &[
			MenuItemDef::new("gp1", "Stoner Pie", "Pepperoni, sausage, mushrooms, onions, green peppers", 18.99, "Specialty Pizzas").popular(),
			MenuItemDef::new("gp2", "Garlic Knots (6 pack)", "Fresh-baked knots with garlic butter and parmesan", 5.99, "Sides").popular(),
			MenuItemDef::new("gp3", "Buffalo Wings (10 pc)", "Crispy wings tossed in buffalo sauce with ranch", 12.99, "Wings").student_special(),
		],
	},
	RestaurantDef {
		id: "5",
		slug: "sushi-2-go",
		name: "Sushi-2-Go",
		cuisine: &["Japanese", "Sushi", "Asian"],
		rating: 4.6,
		review_count: 445,
		description: "Fresh sushi and Japanese favorites made to order with quality ingredients.",
		long_description: "Sushi-2-Go offers fresh, affordable sushi made daily by experienced sushi chefs. From classic California rolls to creative specialty rolls, each piece is crafted with care using high-quality fish and authentic Japanese techniques. Perfect for a healthy, quick meal.",
		address: "654 W University Ave, Gainesville, FL 32601",
		phone: "(352) 555-0105",
		website: None,
		hours: &[
			("Monday", "11:30 AM - 9:30 PM"),
			("Tuesday", "11:30 AM - 9:30 PM"),
			("Wednesday", "11:30 AM - 9:30 PM"),
			("Thursday", "11:30 AM - 9:30 PM"),
			("Friday", "11:30 AM - 10:00 PM"),
			("Saturday", "12:00 PM - 10:00 PM"),
			("Sunday", "12:00 PM - 9:00 PM"),
		],
		coordinates: Coordinates::new(29.6507, -82.3295),
		distance_from_campus: "0.7 miles",
		price_range: PriceRange::Moderate,
		image: "/restaurants/sushi2go-hero.jpg",
		gallery: &["/restaurants/sushi2go-1.jpg", "/restaurants/sushi2go-2.jpg"],
		specialties: &["California Roll", "Spicy Tuna Roll", "Bento Boxes"],
		student_discount: "20% off bento boxes",
		popular_items: &["California Roll", "Spicy Tuna Roll", "Chicken Teriyaki Bento"],
		menu: &[
			MenuItemDef::new("s2g1", "California Roll", "Crab, avocado, cucumber with sesame seeds", 7.99, "Classic Rolls").popular(),
			MenuItemDef::new("s2g2", "Spicy Tuna Roll", "Fresh tuna with spicy mayo and sriracha", 9.99, "Specialty Rolls").popular(),
			MenuItemDef::new("s2g3", "Chicken Teriyaki Bento", "Grilled chicken, rice, salad, and miso soup", 13.99, "Bento Boxes")
				.student_special()
				.dietary(&["Gluten-Free Option"]),
		],
	},
];
