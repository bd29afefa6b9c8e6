//! Common error catalog with fix checklists.

use super::CommonError;

pub const COMMON_ERRORS: &[CommonError] = &[
    // Laravel
    CommonError {
        title: "Class not found",
        description: "Laravel class not found error",
        error: "Class 'App\\Models\\User' not found",
        category: "laravel",
        solution: r#"1. Check if the class exists in the correct namespace
2. Run: composer dump-autoload
3. Check the use statement at the top of your file
4. Verify the class name spelling
5. Check if the file is in the correct directory"#,
    },
    CommonError {
        title: "SQLSTATE Connection Refused",
        description: "Database connection error in Laravel",
        error: "SQLSTATE[HY000] [2002] Connection refused",
        category: "laravel",
        solution: r#"1. Check database credentials in .env file
2. Ensure database server is running
3. Verify DB_HOST, DB_PORT, DB_DATABASE values
4. Run: php artisan config:cache
5. Check if MySQL/PostgreSQL service is running"#,
    },
    CommonError {
        title: "Route not defined",
        description: "Laravel route not found error",
        error: "Route [login] not defined",
        category: "laravel",
        solution: r#"1. Check if route exists in routes/web.php or routes/api.php
2. Verify route name matches the ->name(...) definition
3. Clear route cache: php artisan route:clear
4. Check middleware redirects
5. Run: php artisan route:list to see all routes"#,
    },
    CommonError {
        title: "Target class does not exist",
        description: "Laravel controller not found",
        error: "Target class [App\\Http\\Controllers\\HomeController] does not exist",
        category: "laravel",
        solution: r#"1. Check if controller file exists
2. Verify namespace in controller file
3. Run: php artisan make:controller HomeController
4. Check controller name spelling in routes
5. Run: composer dump-autoload"#,
    },
    CommonError {
        title: "Mass assignment exception",
        description: "Laravel mass assignment protection",
        error: "Add [field_name] to fillable property to allow mass assignment",
        category: "laravel",
        solution: r#"1. Add field to $fillable array in model
2. Or use $guarded = ['id'] instead
3. Use create() or update() with specific fields"#,
    },
    // MySQL
    CommonError {
        title: "Access denied for user",
        description: "MySQL authentication error",
        error: "Access denied for user 'root'@'localhost'",
        category: "mysql",
        solution: r#"1. Check username and password
2. Reset the MySQL password with ALTER USER
3. Grant privileges: GRANT ALL PRIVILEGES ON *.* TO 'root'@'localhost';
4. Flush privileges: FLUSH PRIVILEGES;
5. Check if user exists: SELECT User FROM mysql.user;"#,
    },
    CommonError {
        title: "Table doesn't exist",
        description: "MySQL table not found error",
        error: "Table 'database.table_name' doesn't exist",
        category: "mysql",
        solution: r#"1. Check table name spelling
2. Verify database name
3. Run migrations: php artisan migrate
4. Check if you're connected to correct database
5. Show tables: SHOW TABLES;"#,
    },
    CommonError {
        title: "Duplicate entry error",
        description: "MySQL unique constraint violation",
        error: "Duplicate entry 'value' for key 'PRIMARY'",
        category: "mysql",
        solution: r#"1. Check for existing records before insert
2. Use INSERT IGNORE or ON DUPLICATE KEY UPDATE
3. Check unique constraints: SHOW INDEX FROM table_name;
4. Use proper WHERE clause in UPDATE
5. Check auto_increment values"#,
    },
    CommonError {
        title: "Foreign key constraint fails",
        description: "MySQL foreign key violation",
        error: "Cannot add or update a child row: a foreign key constraint fails",
        category: "mysql",
        solution: r#"1. Check if referenced record exists
2. Insert parent record first
3. Check foreign key constraints: SHOW CREATE TABLE table_name;
4. Temporarily disable checks: SET FOREIGN_KEY_CHECKS=0;
5. Verify column data types match"#,
    },
    // Git
    CommonError {
        title: "fatal: not a git repository",
        description: "Git repository not initialized",
        error: "fatal: not a git repository (or any of the parent directories): .git",
        category: "git",
        solution: r#"1. Initialize git repository: git init
2. Navigate to correct directory
3. Check if .git folder exists
4. Clone repository if working with remote: git clone <url>
5. Check current directory: pwd"#,
    },
    CommonError {
        title: "Permission denied (publickey)",
        description: "Git SSH authentication error",
        error: "Permission denied (publickey)",
        category: "git",
        solution: r#"1. Generate SSH key: ssh-keygen -t rsa -b 4096
2. Add key to SSH agent: ssh-add ~/.ssh/id_rsa
3. Copy public key: cat ~/.ssh/id_rsa.pub
4. Add to GitHub/GitLab SSH keys
5. Test connection: ssh -T git@github.com"#,
    },
    CommonError {
        title: "Merge conflict",
        description: "Git merge conflicts need resolution",
        error: "Automatic merge failed; fix conflicts and then commit the result",
        category: "git",
        solution: r#"1. Open conflicted files and resolve conflicts
2. Look for <<<<<<< ======= >>>>>>> markers
3. Choose which changes to keep
4. Stage resolved files: git add <file>
5. Complete merge: git commit"#,
    },
];
