/*!
# `IF <expression> THEN <statement>`

## Purpose
Executes the rest of the line only when the expression is not zero.

## Remarks
When the expression is zero, execution continues on the next line
and `THEN` is not checked.

## Example
```text
10 A=5
20 IF A=5 THEN PRINT "FIVE"
30 IF A<>5 THEN PRINT "NOT FIVE"
RUN
FIVE
```

*/
